//! Button event delivery
//!
//! Key principles:
//! - Events are plain tagged values (`UserInterfaceEvent`)
//! - Every registered listener is notified, in registration order
//! - Delivery is synchronous on the calling thread

use std::sync::mpsc::Sender;

use crate::ui::widgets::UIButtonType;

/// Raised when an overlay button is clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserInterfaceEvent {
    /// Button that triggered the event
    pub button: UIButtonType,
}

impl UserInterfaceEvent {
    /// Create an event for the given button
    pub fn new(button: UIButtonType) -> Self {
        Self { button }
    }
}

/// Receiver of overlay button events
///
/// Listeners must not trigger another dispatch from inside `on_button`.
pub trait UserInterfaceListener {
    /// Handle a button event
    fn on_button(&mut self, event: &UserInterfaceEvent);
}

impl<F> UserInterfaceListener for F
where
    F: FnMut(&UserInterfaceEvent),
{
    fn on_button(&mut self, event: &UserInterfaceEvent) {
        self(event);
    }
}

/// Forwards events into a channel; a disconnected receiver is ignored
#[derive(Debug, Clone)]
pub struct ChannelListener(pub Sender<UserInterfaceEvent>);

impl UserInterfaceListener for ChannelListener {
    fn on_button(&mut self, event: &UserInterfaceEvent) {
        if self.0.send(*event).is_err() {
            log::debug!("Dropping {:?}: receiver disconnected", event.button);
        }
    }
}

/// Ordered list of button listeners
#[derive(Default)]
pub struct ButtonEvents {
    listeners: Vec<Box<dyn UserInterfaceListener>>,
}

impl ButtonEvents {
    /// Create an empty listener list
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is notified after all earlier ones
    pub fn add_listener(&mut self, listener: Box<dyn UserInterfaceListener>) {
        self.listeners.push(listener);
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an event to every listener
    pub fn notify(&mut self, event: &UserInterfaceEvent) {
        log::debug!("Dispatching {:?} to {} listener(s)", event.button, self.listeners.len());
        for listener in &mut self.listeners {
            listener.on_button(event);
        }
    }
}

impl std::fmt::Debug for ButtonEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonEvents")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

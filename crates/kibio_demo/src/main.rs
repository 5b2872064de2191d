//! Headless Kibio overlay demo
//!
//! Drives the overlay through a scripted sequence of pointer clicks,
//! records the draw commands of every frame and logs the resulting events.
//!
//! Usage: `kibio_demo [overlay.toml|overlay.ron]`

mod controller;

use kibio_ui::foundation::logging;
use kibio_ui::prelude::*;
use std::sync::mpsc;

use controller::Controller;

const SCREEN_WIDTH: f32 = 1024.0;
const SCREEN_HEIGHT: f32 = 768.0;

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Ui(#[from] UiError),

    #[error(transparent)]
    Config(#[from] kibio_ui::config::ConfigError),
}

/// Grey placeholder icon, brightness keyed on the button
fn placeholder_texture(button: UIButtonType) -> Texture {
    let shade = 96 + 16 * button.index() as u8;
    Texture::new(ImageData::solid_color(32, 32, [shade, shade, shade, 255]))
}

fn build_ui(config: &UserInterfaceConfig) -> Result<UserInterface, DemoError> {
    match UserInterface::new(config) {
        Ok(ui) => Ok(ui),
        Err(UiError::Asset(e)) => {
            log::warn!("Icons unavailable ({}), using placeholders", e);
            Ok(UserInterface::with_textures(config, placeholder_texture)?)
        }
        Err(e) => Err(e.into()),
    }
}

fn click(ui: &mut UserInterface, button: UIButtonType) {
    let bounds = ui.button(button).bounds();
    ui.update_mouse_position(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);
    ui.update_mouse_button(MouseButton::Left, true);
    ui.update_mouse_button(MouseButton::Left, false);
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading overlay config from {}", path);
            UserInterfaceConfig::load_from_file(&path)?
        }
        None => UserInterfaceConfig::default(),
    };

    let mut ui = build_ui(&config)?;
    ui.set_screen_size(SCREEN_WIDTH, SCREEN_HEIGHT);
    ui.set_project_name("demo");

    let (tx, rx) = mpsc::channel();
    ui.add_listener(ChannelListener(tx));
    ui.add_listener(|event: &UserInterfaceEvent| log::debug!("Listener saw {:?}", event.button));
    let mut controller = Controller::new(rx);

    let script = [
        Some(UIButtonType::ToolBrush),
        Some(UIButtonType::NewProject),
        None,
        Some(UIButtonType::ToolRotate),
        Some(UIButtonType::ToggleMode),
        Some(UIButtonType::SaveProject),
    ];

    let mut backend = CommandRecorder::new();
    for (frame, step) in script.iter().enumerate() {
        match step {
            Some(button) => click(&mut ui, *button),
            None => ui.update_mouse_position(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        }

        ui.update();
        controller.process(&mut ui);
        ui.draw(&mut backend)?;

        log::info!(
            "Frame {}: {} draw commands, tool {:?}, project '{}'",
            frame,
            backend.commands().len(),
            ui.selected_tool(),
            ui.project_name()
        );
    }

    ui.toggle_visible();
    ui.draw(&mut backend)?;
    log::info!(
        "Overlay hidden; {} passes recorded, mode {:?}, {} events handled",
        backend.pass_count(),
        controller.mode(),
        controller.handled().len()
    );

    Ok(())
}

fn main() {
    logging::init();
    log::info!("Starting Kibio overlay demo");

    if let Err(e) = run() {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

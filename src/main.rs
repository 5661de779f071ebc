//! Platformer entry point
//!
//! Text menus on stdin/stdout; each level runs full-screen in the terminal.

use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};

use platformer::menu::Menu;
use platformer::platform::TerminalSurface;
use platformer::settings::SETTINGS_FILE;
use platformer::sim::{Level, validate_catalogue};
use platformer::{Settings, persistence, play_level};

fn run() -> Result<()> {
    let settings = Settings::load(Path::new(SETTINGS_FILE));

    let levels = validate_catalogue().context("level catalogue is invalid")?;
    log::info!("{levels} playable levels");

    let mut registry = persistence::load_registry(&settings.save_path);

    let stdin = io::stdin();
    let mut menu = Menu::new(stdin.lock(), io::stdout(), settings.top_scores);
    let session = menu.run(&mut registry, |number| {
        let level = Level::new(number)?;
        let mut surface = TerminalSurface::new(settings.key_hold_frames)?;
        Ok(play_level(level, &mut surface, settings.frame_rate))
    });

    // Keep whatever was scored even if the session ended on an error
    persistence::save_registry(&registry, &settings.save_path)
        .with_context(|| format!("failed to save {}", settings.save_path.display()))?;
    settings
        .save(Path::new(SETTINGS_FILE))
        .context("failed to save settings")?;

    session.context("menu session failed")?;
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Platformer starting...");

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

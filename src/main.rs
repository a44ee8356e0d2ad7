//! Terminal runner (default binary).
//!
//! Single-threaded event loop: draw, wait for input until the next gravity
//! tick is due, apply commands, then run every tick that has come due.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{error, info, warn};

use tetro::config::{self, Config};
use tetro::core::{GameState, Ticker};
use tetro::input::{handle_key_event, should_quit};
use tetro::term::{draw_scene, TerminalSurface};

fn main() -> Result<()> {
    let (mut config, load_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(&config);
    info!("starting tetro");
    match load_error {
        Some(e) => error!("failed to load configuration, using defaults: {e}"),
        None => info!("configuration loaded from {}", config::config_path().display()),
    }
    for adjustment in config.normalize() {
        warn!("{adjustment}");
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("seed {seed}, tick {} ms", config.tick_ms);

    let mut surface = TerminalSurface::new(config.geometry());
    surface.enter()?;

    let result = run(&mut surface, GameState::new(seed), config.ticker());

    // Always try to restore terminal state.
    if let Err(e) = surface.exit() {
        warn!("failed to restore terminal: {e}");
    }
    if let Err(e) = &result {
        error!("game error: {e:?}");
    }
    result
}

fn run(surface: &mut TerminalSurface, mut game: GameState, mut ticker: Ticker) -> Result<()> {
    let mut last = Instant::now();

    loop {
        draw_scene(&game, surface)?;

        let timeout = Duration::from_millis(u64::from(ticker.until_next_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit after {} pieces", game.pieces_spawned());
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(w, h) => surface.resize(w, h),
                _ => {}
            }
        }

        // Whole milliseconds only; the fraction stays in `last`.
        let elapsed_ms = last.elapsed().as_millis();
        last += Duration::from_millis(elapsed_ms as u64);
        let due = ticker.advance(u32::try_from(elapsed_ms).unwrap_or(u32::MAX));
        for _ in 0..due {
            game.tick();
        }
    }
}

/// Log to a file: stdout belongs to the renderer.
fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    );
    builder.format_timestamp_millis().format_module_path(false);

    match File::create(&config.log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // Nowhere to write; logging to the terminal would corrupt the frame.
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

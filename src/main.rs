//! Terminal falling-block runner (default binary).
//!
//! Collects the player entry on the plain terminal, then switches to raw mode
//! and runs the frame loop: render, wait for input until the next frame, feed
//! the measured elapsed time to the engine.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockfall::config::{resolve_player, Cli, Settings};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{map_key_event, should_quit};
use blockfall::logging::init_file_log;
use blockfall::term::{
    FrameBuffer, GameOverFade, GameView, Hud, PraiseBanner, TerminalRenderer, Viewport,
};
use blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let settings = Settings::from_cli(Cli::parse())?;
    if let Some(path) = &settings.log_file {
        init_file_log(path, settings.log_level)?;
    }

    let player = resolve_player(&settings, &mut io::stdin().lock(), &mut io::stdout())?;
    info!("seed {}", settings.seed);

    let mut game_state = GameState::new(settings.seed);
    game_state.start_with(player);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state, &settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    if result.is_ok() {
        println!(
            "Final score: {} (level {}, {} lines)",
            game_state.score(),
            game_state.level(),
            game_state.lines()
        );
    }
    result
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState, settings: &Settings) -> Result<()> {
    let view = GameView::new(settings.cell_width, 1);
    let mut praise = PraiseBanner::new(settings.seed.rotate_left(16));
    let mut fade = GameOverFade::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(TICK_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game_state.snapshot_into(&mut snap);
        if snap.game_over() {
            fade.advance();
        }
        let hud = Hud {
            player: game_state.player().map(|p| p.name()),
            praise: praise.message(),
            fade: fade.alpha(),
            restart_hint: fade.complete(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key_event(key) {
                        // Gameplay keys only act while a piece is falling.
                        if action == GameAction::Restart || game_state.is_active() {
                            game_state.apply_action(action);
                        }
                        if action == GameAction::Restart {
                            fade.reset();
                            praise.clear();
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so slow frames do not slow gravity.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            game_state.tick(elapsed_ms);
            praise.update(elapsed_ms);
        }

        if let Some(ev) = game_state.take_last_event() {
            praise.on_lock(&ev);
        }
    }
}

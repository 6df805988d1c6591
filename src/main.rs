//! Terminal sprite-bounce runner (default binary).
//!
//! This is the primary entrypoint. It drives the engine with a fixed
//! timestep, polls crossterm input with the remaining-tick timeout, and feeds
//! terminal resize events to the engine's region - the resize-observer role.
//!
//! A `headless` subcommand steps the engine without a TTY and prints a
//! snapshot summary, with tracing enabled (raw-mode TUI and stderr logging do
//! not mix, so the TUI path installs no subscriber).

mod config;

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use tui_bounce::core::{Bounds, Engine};
use tui_bounce::mask::{load_shape, shapes, ShapeMask};
use tui_bounce::term::{
    format_grouped, snapshot_fingerprint, Frame, RenderThrottle, SceneView, Screen, Viewport,
    HUD_WIDTH,
};
use tui_bounce::types::{Region, TICK_MS};

use config::RunConfig;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let run = config::parse_args(&args)?;

    if run.headless_ticks.is_some() {
        return run_headless(&run);
    }

    let mut engine = build_engine(&run);

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run_tui(&mut screen, &mut engine, &run);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

/// Assemble the engine from the run configuration.
///
/// A mask that fails to load leaves the boundary sourceless: the engine stays
/// in the not-ready state (no spawns) instead of crashing.
fn build_engine(run: &RunConfig) -> Engine {
    let bounds = if run.walls {
        Bounds::Walls
    } else {
        let mut mask = ShapeMask::new(run.mask.clone());
        match &run.mask_path {
            Some(path) => match load_shape(path) {
                Ok(img) => mask.set_source(img),
                Err(e) => eprintln!("warning: {} (running without spawns)", e),
            },
            None => mask.set_source(shapes::vessel(256, 310)),
        }
        Bounds::Shaped(Box::new(mask))
    };

    let mut engine = Engine::new(run.seed, run.engine.clone(), bounds);
    engine.set_quantity(run.quantity);
    engine
}

/// The scene region for a terminal of the given size: everything except the
/// border and the HUD column.
fn scene_region(term_w: u16, term_h: u16) -> Region {
    let w = term_w.saturating_sub(HUD_WIDTH + 2).max(1);
    let h = term_h.saturating_sub(2).max(1);
    Region::new(w as f32, h as f32)
}

fn run_tui(screen: &mut Screen, engine: &mut Engine, run: &RunConfig) -> Result<()> {
    let view = SceneView::new(run.glyph, run.glyph_color);
    let mut throttle = RenderThrottle::new(250);

    // Synchronous initial measure so the first frame is not zero-sized.
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    engine.set_region(scene_region(w, h));
    engine.start();

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut snap = engine.snapshot();
    // One frame buffer for the whole session; render_into resizes it and
    // draw_swap trades it against the previously drawn frame.
    let mut frame = Frame::new(0, 0);

    loop {
        // Render.
        engine.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = snapshot_fingerprint(&snap);
        if throttle.should_render(now_ms, fingerprint, !engine.is_running()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, engine.shape_probe(), Viewport::new(w, h), &mut frame);
            screen.draw_swap(&mut frame)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        let step = engine.config().count_divisor;
                        engine.set_quantity(engine.quantity().saturating_add(step));
                    }
                    KeyCode::Char('-') => {
                        let step = engine.config().count_divisor;
                        engine.set_quantity(engine.quantity().saturating_sub(step));
                    }
                    KeyCode::Char(' ') => {
                        if engine.is_running() {
                            engine.stop();
                        } else {
                            engine.start();
                        }
                    }
                    _ => {}
                },
                Event::Resize(w, h) => {
                    engine.set_region(scene_region(w, h));
                    screen.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed = last_tick.elapsed().as_millis() as u32;
            last_tick = Instant::now();
            engine.advance(elapsed);
        }
    }
}

fn run_headless(run: &RunConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let ticks = run.headless_ticks.unwrap_or(0);
    let mut engine = build_engine(run);

    // No terminal to measure; the logical viewbox doubles as the region.
    engine.set_region(Region::new(run.mask.viewbox_w, run.mask.viewbox_h));
    engine.start();
    for _ in 0..ticks {
        engine.step();
    }
    engine.stop();

    let snap = engine.snapshot();
    println!(
        "ticks={} sprites={} target={} quantity={} region={}x{} seed={}",
        snap.tick_id,
        snap.sprites.len(),
        snap.target,
        format_grouped(snap.quantity),
        snap.region.width as u32,
        snap.region.height as u32,
        snap.seed,
    );
    Ok(())
}

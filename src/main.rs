mod agent;
mod board;
mod color;
mod config;
mod error;
mod main_loop;
mod render;
mod style;

use anyhow::{Context, Result};
use piston_window::{AdvancedWindow, EventLoop, PistonWindow, WindowSettings};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::agent::{AgentAction, Population};
use crate::board::Board;
use crate::config::Config;
use crate::error::WindowError;
use crate::main_loop::{FrameLoop, LoopState, Signal};
use crate::render::{PistonCanvas, render_frame};
use crate::style::Palette;

const WINDOW_TITLE: &str = "hunger";
const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;
const BOARD_WIDTH: u32 = 10;
const BOARD_HEIGHT: u32 = 10;
const AGENTS_COUNT: usize = 5;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let config = Config::from_env().context("reading configuration")?;
    let palette = Palette::load().context("parsing style colors")?;

    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT);
    let (seed, mut rng) = config.seeded_rng();
    let population = Population::random(AGENTS_COUNT, &board, &mut rng);
    info!(seed, agents = population.len(), max_fps = config.max_fps, "seeded population");
    debug!(actions = ?AgentAction::ALL, "agent actions");
    for (idx, agent) in population.iter().enumerate() {
        debug!(
            idx,
            x = agent.position.x,
            y = agent.position.y,
            direction = ?agent.direction,
            action = ?agent.action(),
            "agent"
        );
    }

    let mut window: PistonWindow =
        WindowSettings::new(WINDOW_TITLE, [SCREEN_WIDTH, SCREEN_HEIGHT])
            .resizable(true)
            .exit_on_esc(false)
            .build()
            .map_err(|e| WindowError::Create(e.to_string()))?;
    window.set_position([0, 0]);
    window.set_max_fps(config.max_fps);
    info!(width = SCREEN_WIDTH, height = SCREEN_HEIGHT, "window created");

    let logical = [SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64];
    let mut frames = FrameLoop::default();
    while let Some(event) = window.next() {
        if let Some(signal) = Signal::from_event(&event) {
            frames.observe(signal);
        }
        if frames.state() == LoopState::Quit {
            break;
        }

        let drawn = window.draw_2d(&event, |c, g, _device| {
            let mut canvas = PistonCanvas::new(&c, logical, g);
            render_frame(&mut canvas, &board, &population, &palette)
        });
        if let Some(result) = drawn {
            result.context("rendering frame")?;
            frames.frame_presented();
        }
    }

    info!(frames = frames.frames(), "shutting down");
    Ok(())
}

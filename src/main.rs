//! Terminal runner (default binary).
//!
//! Plays a single-player session against the demo board: fade-in, countdown,
//! play, pause. Rendering goes through the cell framebuffer renderer.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_stacker::demo::DemoWell;
use tui_stacker::input::{poll_frame, FrameInput};
use tui_stacker::session::{AppContext, LoggingAudio, SessionConfig, SinglePlayer};
use tui_stacker::term::{Cell, CellCanvas, CellFont, FrameBuffer, TerminalRenderer};
use tui_stacker::term::{CELL_PX_H, CELL_PX_W};
use tui_stacker::types::{SessionEvent, WindowEvent, DEFAULT_GOAL_LINES, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-stacker", version, about = "Falling-block session in the terminal")]
struct Cli {
    /// Target frame time in milliseconds
    #[arg(long, default_value_t = TICK_MS as u64)]
    tick_ms: u64,

    /// Lines to clear per level
    #[arg(long, default_value_t = DEFAULT_GOAL_LINES)]
    goal: u32,

    /// Starting level
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Skip the opening fade
    #[arg(long)]
    no_fade: bool,

    /// Append logs to this file (no logging without it)
    #[arg(long, env = "TUI_STACKER_LOG")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let mut cfg = SessionConfig::default()
            .with_goal_lines(self.goal)
            .with_start_level(self.level);
        if self.no_fade {
            cfg = cfg.with_fade_in(Duration::ZERO);
        }
        cfg
    }
}

fn init_logging(path: Option<&Path>) {
    // The terminal belongs to the game; log to a file or not at all.
    let Some(path) = path else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    else {
        return;
    };

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(file)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());
    info!(?cli, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let mut player = SinglePlayer::new(
        cli.session_config(),
        Box::new(DemoWell::new()),
        Box::new(CellFont),
    );
    let mut audio = LoggingAudio::new();
    let mut input = FrameInput::new();

    let (w, h) = crossterm::terminal::size()?;
    let mut fb = FrameBuffer::new(w, h);

    let frame = Duration::from_millis(cli.tick_ms.max(1));
    let mut last = Instant::now();

    loop {
        poll_frame(&mut input, frame)?;
        if input.quit_requested() {
            info!(score = player.session().score(), "quit");
            return Ok(());
        }
        if input
            .events()
            .iter()
            .any(|e| matches!(e, SessionEvent::Window(WindowEvent::Resized { .. })))
        {
            term.invalidate();
        }

        let now = Instant::now();
        let dt = now - last;
        last = now;

        let (w, h) = crossterm::terminal::size()?;
        fb.resize(w, h);
        player.layout(w as i32 * CELL_PX_W, h as i32 * CELL_PX_H);

        let mut app = AppContext::new(&mut audio);
        player.update(dt, input.events(), &mut app);

        fb.clear(Cell::default());
        player.draw(&mut CellCanvas::new(&mut fb));
        term.present(&mut fb)?;
    }
}

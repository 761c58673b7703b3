use prizewheel::app::{AppState, reducer};
use prizewheel::components::{
    Component, help::Help, prizes::PrizeList, wheel::WheelView,
};
use prizewheel::config::Config;
use prizewheel::events::{Action, Mode};
use prizewheel::geometry::layout_wheel;
use prizewheel::handlers::handle_spin;
use prizewheel::spin::{SpinError, compute_target_rotation};
use prizewheel::svg::export_svg;
use prizewheel::timer::SpinTimer;
use prizewheel::ui::ui;
use prizewheel::{Args, Commands, logging};

use clap::Parser;
use crossterm::{
    event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{info, warn};

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up panic handler to ensure clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let args = Args::parse();

    // Logging is best effort; the wheel works without it.
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    match args.command {
        Some(Commands::Export {
            output,
            rotation,
            winner,
        }) => return run_export(&config, &output, rotation, winner),
        Some(Commands::Layout { pretty }) => return run_layout(&config, pretty),
        Some(Commands::Init { output }) => return run_init(&config, output.as_deref()),
        None => {}
    }

    // Check if we have a TTY (after argument parsing so --help works)
    if !crossterm::tty::IsTty::is_tty(&io::stdin()) {
        anyhow::bail!("prizewheel requires an interactive terminal (TTY).");
    }

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    // Clear screen immediately to prevent any error messages from showing
    let _ = terminal.clear();

    info!(segments = config.segments.len(), "starting wheel");
    let mut state = AppState::new(config);
    let res = run_app(&mut terminal, &mut state).await;

    restore_terminal().context("Failed to restore terminal")?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn run_export(
    config: &Config,
    output: &Path,
    rotation: f64,
    winner: Option<usize>,
) -> anyhow::Result<()> {
    let segments = &config.segments;
    let total = segments.len();

    let rotation = match winner {
        Some(winner) if winner >= total => {
            return Err(SpinError::WinnerOutOfRange { winner, total }.into());
        }
        Some(winner) => {
            compute_target_rotation(rotation, winner, total, config.spin.extra_spins)
                .ok_or(SpinError::EmptyWheel)?
        }
        None => rotation,
    };

    let palette = config.theme.current_scheme().palette();
    export_svg(output, segments, rotation, &palette)?;
    info!(path = %output.display(), rotation, "exported wheel");
    println!("Wrote {}", output.display());
    Ok(())
}

fn run_layout(config: &Config, pretty: bool) -> anyhow::Result<()> {
    let sectors = layout_wheel(&config.segments);
    let json = if pretty {
        serde_json::to_string_pretty(&sectors)
    } else {
        serde_json::to_string(&sectors)
    }
    .context("Failed to serialize layout")?;
    println!("{json}");
    Ok(())
}

fn run_init(config: &Config, output: Option<&Path>) -> anyhow::Result<()> {
    let path = match output {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };
    info!(path = %path.display(), "wrote configuration");
    println!("Wrote {}", path.display());
    Ok(())
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal() -> anyhow::Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Applies an action. Spins also arm the completion timer, which reports
/// back through the action channel.
fn dispatch(state: &mut AppState, action: Action, action_tx: &mpsc::Sender<Action>) {
    match action {
        Action::Spin => {
            let Some(commit) = handle_spin(state) else {
                return;
            };
            let tx = action_tx.clone();
            let spin_id = commit.spin_id;
            state.spin_timer = Some(SpinTimer::arm(spin_id, commit.duration, move || {
                if let Err(e) = tx.try_send(Action::SpinComplete(spin_id)) {
                    warn!(spin_id, "failed to deliver spin completion: {}", e);
                }
            }));
        }
        action => reducer(state, action),
    }
}

fn handle_event(event: Event, state: &mut AppState, action_tx: &mpsc::Sender<Action>) {
    let Event::Key(key) = event else {
        return;
    };
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        reducer(state, Action::Quit);
        return;
    }

    let action: Option<Action> = match state.mode {
        Mode::Normal => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::CycleTheme),
            _ => {
                let mut wheel = WheelView::new();
                wheel.handle_key_events(key.code, state).or_else(|| {
                    let mut prizes = PrizeList::new();
                    prizes.handle_key_events(key.code, state)
                })
            }
        },
        Mode::Help => {
            let mut help = Help::new();
            help.handle_key_events(key.code, state)
        }
    };

    if let Some(action) = action {
        dispatch(state, action, action_tx);
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> io::Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut event_stream = crossterm::event::EventStream::new();

    // Set up frame rate for consistent redraws (following ratatui async pattern)
    const FRAMES_PER_SECOND: f32 = 30.0;
    let period = std::time::Duration::from_secs_f32(1.0 / FRAMES_PER_SECOND);
    let mut interval = tokio::time::interval(period);

    loop {
        tokio::select! {
            // Prioritize keyboard events with biased selection
            biased;

            Some(Ok(event)) = event_stream.next() => {
                handle_event(event, state, &action_tx);
            }
            // Redraw at consistent frame rate (30 FPS)
            _ = interval.tick() => {
                terminal.draw(|f| ui(f, state))?;
            }
            Some(action) = action_rx.recv() => {
                dispatch(state, action, &action_tx);
            }
        }

        if state.should_quit {
            info!(spins = state.spins_completed, "quitting");
            return Ok(());
        }
    }
}

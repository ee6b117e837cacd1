pub(crate) mod effects;
pub(crate) mod intervaltimer;
pub(crate) mod led;
pub(crate) mod options;
pub(crate) mod palettes;
pub(crate) mod states;
pub(crate) mod termoutput;
pub(crate) mod twinkle;

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::intervaltimer::IntervalTimer;
use crate::led::LedFrame;
use crate::options::BadgeOptions;
use crate::states::custompatterns::custom_patterns_display;
use crate::states::diegoteki::diegoteki_display;
use crate::states::{DisplayState, TouchEvent, Transition};
use crate::termoutput::TermOutput;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateChoice {
    /// Dragon head, rotating palette, starlight and random flag
    Patterns,
    /// DiegoTeki flag animations
    Diegoteki,
}

#[derive(Parser)]
struct Cli {
    /// TOML file with badge options
    #[arg(short, long, value_name = "FILE")]
    config: Option<std::path::PathBuf>,

    /// The display state to run
    #[arg(short, long, value_enum, default_value_t = StateChoice::Patterns)]
    state: StateChoice,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Log the achieved frames per second
    #[arg(long)]
    fps: bool,
}

enum Command {
    Touch(TouchEvent),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "s" => Some(Command::Touch(TouchEvent::FingerprintShortpress)),
        "l" => Some(Command::Touch(TouchEvent::FingerprintLongpress)),
        "r" => Some(Command::Touch(TouchEvent::FingerprintRelease)),
        "a" => Some(Command::Touch(TouchEvent::AllLongpress)),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

fn spawn_input_reader(tx: Sender<Command>) -> anyhow::Result<()> {
    thread::Builder::new()
        .name("Input".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        log::warn!("Error reading stdin: {err}");
                        break;
                    }
                };

                match parse_command(&line) {
                    Some(command) => {
                        if tx.send(command).is_err() {
                            break;
                        }
                    }
                    None => log::warn!("Unknown command {:?}, expected one of s/l/r/a/q", line),
                }
            }
        })
        .context("Failed to create input thread")?;
    Ok(())
}

/// Apply pending commands. Returns false once the display should stop.
fn handle_commands(
    rx: &Receiver<Command>,
    state: &mut dyn DisplayState,
    globals: &mut states::Globals,
    frame: &mut LedFrame,
) -> bool {
    while let Ok(command) = rx.try_recv() {
        match command {
            Command::Quit => return false,
            Command::Touch(event) => {
                log::debug!("Touch event {:?}", event);
                if let Some(Transition::MenuMain) = state.handle_touch(event, globals, frame) {
                    log::info!("({}) Leaving for the main menu", state.name());
                    return false;
                }
            }
        }
    }
    true
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let options = BadgeOptions::load(args.config.as_deref())?;
    let settings = options
        .animation_settings()
        .context("Invalid starlight options")?;
    let mut globals = options.globals();

    let mut state: Box<dyn DisplayState> = match args.state {
        StateChoice::Patterns => Box::new(custom_patterns_display(settings)),
        StateChoice::Diegoteki => Box::new(diegoteki_display(settings)),
    };
    log::info!(
        "Starting display state {} (remembered: {})",
        state.name(),
        state.should_be_remembered()
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;
    }

    let (tx, rx) = mpsc::channel();
    spawn_input_reader(tx)?;

    let mut output = TermOutput::stdout();
    let mut frame = LedFrame::default();
    state.entry(&globals);
    let mut timer = IntervalTimer::new(state.tick_rate_ms(&globals), args.fps);
    let mut ticks: u64 = 0;

    while running.load(Ordering::SeqCst) {
        if !handle_commands(&rx, state.as_mut(), &mut globals, &mut frame) {
            break;
        }

        if globals.take_dirty() {
            log::info!(
                "Settings changed: cst_patterns_idx={} custom_idx={}",
                globals.cst_patterns_idx,
                globals.custom_idx
            );
        }

        state.run(&globals, &mut frame, &mut rng);
        if let Err(err) = output.render(&frame) {
            log::warn!("Failed to render frame: {err}");
        }

        ticks += 1;
        if args.ticks.map_or(false, |limit| ticks >= limit) {
            break;
        }

        timer.set_tick_rate(state.tick_rate_ms(&globals));
        timer.sleep_until_next_tick();
    }

    output.blackout().context("Failed to blank LEDs")?;
    log::info!("Stopped after {} ticks", ticks);
    Ok(())
}

// Drives the push/pull Sokoban engine from the command line.
// Actions come from a seeded random policy or a scripted list of codes; there
// is no keyboard play.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pull_engine::config::EnvConfig;
use pull_engine::console_interface::{
    cleanup_terminal, handle_input, parse_level, render_room_to_string, render_watch,
    setup_terminal, ConsoleInput,
};
use pull_engine::core::{action_lookup, Cell, Room};
use pull_engine::env::{PushPullEnv, RenderMode};
use pull_engine::models::WatchRenderState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#;

#[derive(Parser)]
#[command(about = "Push and pull Sokoban transition engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the action code table.
    Actions,
    /// Run one episode and print every step as a JSON line.
    Rollout {
        #[command(flatten)]
        episode: EpisodeArgs,
        #[arg(long, value_enum, default_value = "text")]
        mode: ModeArg,
    },
    /// Run one episode in a terminal view.
    Watch {
        #[command(flatten)]
        episode: EpisodeArgs,
        /// Delay between steps in milliseconds.
        #[arg(long, default_value_t = 200)]
        delay_ms: u64,
    },
}

#[derive(clap::Args)]
struct EpisodeArgs {
    /// Level file in the usual Sokoban notation. A built-in level is used otherwise.
    #[arg(long)]
    level: Option<PathBuf>,
    /// JSON environment config. Defaults are fitted to the level otherwise.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma separated action codes. A random policy is used otherwise.
    #[arg(long, value_delimiter = ',')]
    actions: Option<Vec<i64>>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Upper bound on steps for the random policy.
    #[arg(long, default_value_t = 120)]
    steps: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Text,
    Raw,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Text => RenderMode::Text,
            ModeArg::Raw => RenderMode::Raw,
        }
    }
}

/// Source of action codes for one episode.
enum Policy {
    Scripted(std::vec::IntoIter<i64>),
    Random { rng: StdRng, remaining: u32 },
}

impl Policy {
    fn from_args(args: &EpisodeArgs) -> Policy {
        match &args.actions {
            Some(codes) => Policy::Scripted(codes.clone().into_iter()),
            None => Policy::Random {
                rng: StdRng::seed_from_u64(args.seed),
                remaining: args.steps,
            },
        }
    }

    fn next_code(&mut self) -> Option<i64> {
        match self {
            Policy::Scripted(codes) => codes.next(),
            Policy::Random { rng, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                Some(rng.random_range(0..action_lookup().len() as i64))
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Actions => {
            for (code, name) in action_lookup().iter().enumerate() {
                println!("{:>2}  {}", code, name);
            }
            Ok(())
        }
        Command::Rollout { episode, mode } => run_rollout(&episode, mode.into()),
        Command::Watch { episode, delay_ms } => run_watch(&episode, Duration::from_millis(delay_ms)),
    }
}

fn load_env(args: &EpisodeArgs) -> Result<PushPullEnv> {
    let level = match &args.level {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading level {}", path.display()))?,
        None => DEFAULT_LEVEL.to_string(),
    };
    let room = parse_level(&level).context("parsing level")?;

    let config = match &args.config {
        Some(path) => EnvConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => fitted_config(&room),
    };

    info!(dim_room = ?room.dim(), num_boxes = config.num_boxes, "loaded level");
    Ok(PushPullEnv::with_symbols(config, room)?)
}

fn fitted_config(room: &Room) -> EnvConfig {
    EnvConfig {
        dim_room: room.dim(),
        num_boxes: room.count(Cell::Box) + room.count(Cell::BoxOnTarget),
        ..EnvConfig::default()
    }
}

fn run_rollout(args: &EpisodeArgs, mode: RenderMode) -> Result<()> {
    let mut env = load_env(args)?;
    let mut policy = Policy::from_args(args);
    let mut total_reward = 0.0;

    while let Some(code) = policy.next_code() {
        let result = match env.step_code(code, mode) {
            Ok(result) => result,
            Err(err) => {
                warn!(code, %err, "skipping rejected action");
                continue;
            }
        };
        total_reward += result.reward;
        let line = json!({
            "step": env.num_env_steps(),
            "action": code,
            "observation": result.observation,
            "reward": result.reward,
            "done": result.done,
            "info": result.info,
        });
        println!("{}", serde_json::to_string(&line)?);
        if result.done {
            break;
        }
    }

    info!(steps = env.num_env_steps(), total_reward, "rollout finished");
    Ok(())
}

fn run_watch(args: &EpisodeArgs, delay: Duration) -> Result<()> {
    let mut env = load_env(args)?;
    let mut policy = Policy::from_args(args);
    let mut terminal = setup_terminal().map_err(|e| anyhow::anyhow!("{e}"))?;

    let mut state = WatchRenderState {
        room_text: render_room_to_string(env.room()),
        step: 0,
        reward: 0.0,
        total_reward: 0.0,
        done: false,
        last_info: None,
    };
    render_watch(&mut terminal, &state).map_err(|e| anyhow::anyhow!("{e}"))?;

    while let Some(code) = policy.next_code() {
        match handle_input(delay).map_err(|e| anyhow::anyhow!("{e}"))? {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }

        let result = match env.step_code(code, RenderMode::Text) {
            Ok(result) => result,
            Err(err) => {
                warn!(code, %err, "skipping rejected action");
                continue;
            }
        };
        state.room_text = render_room_to_string(env.room());
        state.step = env.num_env_steps();
        state.reward = result.reward;
        state.total_reward += result.reward;
        state.done = result.done;
        state.last_info = Some(result.info);
        render_watch(&mut terminal, &state).map_err(|e| anyhow::anyhow!("{e}"))?;

        if state.done {
            // Keep showing the final room until the user presses a key
            while let Ok(ConsoleInput::Timeout) = handle_input(Duration::from_millis(50)) {}
            break;
        }
    }

    cleanup_terminal().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

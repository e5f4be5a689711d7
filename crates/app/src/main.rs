use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, RunnerConfig};
use trial_core::model::{Catalog, GroupId};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidFeedbackMs { raw: String },
    InvalidSeed { raw: String },
    InvalidGroup { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidFeedbackMs { raw } => {
                write!(f, "invalid --feedback-ms value: {raw}")
            }
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidGroup { raw } => write!(f, "invalid --group value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    clock: Clock,
    config: RunnerConfig,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn runner_config(&self) -> RunnerConfig {
        self.config
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    config: RunnerConfig,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--feedback-ms <ms>] [--seed <u64>] [--group <a|b>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --feedback-ms 1000");
    eprintln!("  --group a");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VALIDITY_FEEDBACK_MS, VALIDITY_SEED, VALIDITY_GROUP, RUST_LOG");
}

fn parse_feedback_ms(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidFeedbackMs { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_group(raw: String) -> Result<GroupId, ArgsError> {
    raw.parse::<GroupId>()
        .map_err(|_| ArgsError::InvalidGroup { raw })
}

impl Args {
    /// Environment first, flags override.
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut config = RunnerConfig::default();
        if let Some(raw) = env("VALIDITY_FEEDBACK_MS") {
            config.feedback_delay = parse_feedback_ms(raw)?;
        }
        if let Some(raw) = env("VALIDITY_SEED") {
            config.seed = Some(parse_seed(raw)?);
        }
        if let Some(raw) = env("VALIDITY_GROUP") {
            config.initial_group = parse_group(raw)?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    config.feedback_delay = parse_feedback_ms(value)?;
                }
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    config.seed = Some(parse_seed(value)?);
                }
                "--group" => {
                    let value = require_value(args, "--group")?;
                    config.initial_group = parse_group(value)?;
                }
                "--help" | "-h" => {
                    return Ok(Self { config, help: true });
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config,
            help: false,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(|key| std::env::var(key).ok(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    init_tracing();
    tracing::info!(
        feedback_ms = parsed.config.feedback_delay.as_millis() as u64,
        seed = ?parsed.config.seed,
        group = %parsed.config.initial_group,
        "launching validity experiment"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog: Arc::new(Catalog::builtin()),
        clock: Clock::default_clock(),
        config: parsed.config,
    });
    let context = build_app_context(&app);

    // Some dev setups open the window always-on-top by default.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quotes vs. --- Validation Experiment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

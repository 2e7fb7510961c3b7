use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{GameRules, RulesError, SigilPool, SigilPoolError};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidRounds { raw: String },
    InvalidWinPercent { raw: String },
    InvalidRules(RulesError),
    InvalidSigils(SigilPoolError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidRounds { raw } => write!(f, "invalid --rounds value: {raw}"),
            ArgsError::InvalidWinPercent { raw } => {
                write!(f, "invalid --win-percent value: {raw}")
            }
            ArgsError::InvalidRules(err) => write!(f, "{err}"),
            ArgsError::InvalidSigils(err) => write!(f, "{err}"),
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
    rules: GameRules,
    sigil_labels: Vec<String>,
    autoplay_audio: bool,
}

impl UiApp for DesktopApp {
    fn rules(&self) -> GameRules {
        self.rules
    }

    fn sigil_labels(&self) -> Vec<String> {
        self.sigil_labels.clone()
    }

    fn autoplay_audio(&self) -> bool {
        self.autoplay_audio
    }
}

struct Args {
    rules: GameRules,
    pool: SigilPool,
    muted: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--rounds <n>] [--win-percent <p>] [--sigils <a,b,c,...>] [--muted]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --rounds 5");
    eprintln!("  --win-percent 80");
    eprintln!("  the classic Westeros pool, music on");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_ROUNDS, QUIZ_WIN_PERCENT");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let standard = GameRules::standard();
        let mut rounds = std::env::var("QUIZ_ROUNDS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or_else(|| standard.rounds_limit());
        let mut win_percent = std::env::var("QUIZ_WIN_PERCENT")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or_else(|| standard.win_threshold_percent());
        let mut sigils: Option<Vec<String>> = None;
        let mut muted = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--rounds" => {
                    let value = require_value(args, "--rounds")?;
                    rounds = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidRounds { raw: value.clone() })?;
                }
                "--win-percent" => {
                    let value = require_value(args, "--win-percent")?;
                    win_percent = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidWinPercent { raw: value.clone() })?;
                }
                "--sigils" => {
                    let value = require_value(args, "--sigils")?;
                    sigils = Some(value.split(',').map(|label| label.to_string()).collect());
                }
                "--muted" => muted = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let rules = GameRules::new(rounds, win_percent).map_err(ArgsError::InvalidRules)?;
        let pool = match sigils {
            Some(labels) => SigilPool::new(labels).map_err(ArgsError::InvalidSigils)?,
            None => SigilPool::westeros(),
        };

        Ok(Self { rules, pool, muted })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        print_usage();
        e
    })?;

    let app = DesktopApp {
        rules: parsed.rules,
        sigil_labels: parsed.pool.into_labels(),
        autoplay_audio: !parsed.muted,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz of Thrones")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

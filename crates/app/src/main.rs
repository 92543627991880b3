use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use review_core::model::{AskRequest, FileSlot, SelectedFile, UploadSelection};
use services::config::{API_URL_ENV, TIMEOUT_ENV};
use services::{BackendConfig, HttpBackend, ReviewService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::vm::{
    answers_report, ask_report, document_report, map_answer_cards, map_ask_answer,
    map_document_info, map_metrics, map_scored_cards, map_tally, scoring_report,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingFlag { command: &'static str, flag: &'static str },
    UnknownArg(String),
    NotAllowed { command: &'static str, flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingFlag { command, flag } => write!(f, "{command} requires {flag}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::NotAllowed { command, flag } => {
                write!(f, "{flag} is not accepted by {command}")
            }
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
    review_service: Arc<ReviewService>,
}

impl UiApp for DesktopApp {
    fn review_service(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review_service)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--api-url <url>]");
    eprintln!("  cargo run -p app -- rag    --pdf <file> --questions <file> [--api-url <url>]");
    eprintln!(
        "  cargo run -p app -- score  --questions <file> --expected <file> [--api-url <url>]"
    );
    eprintln!("  cargo run -p app -- ask    --question <text> [--pdf <file>] [--api-url <url>]");
    eprintln!("  cargo run -p app -- info   [--api-url <url>]");
    eprintln!("  cargo run -p app -- health [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, {TIMEOUT_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Rag,
    Score,
    Ask,
    Info,
    Health,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "rag" => Some(Self::Rag),
            "score" => Some(Self::Score),
            "ask" => Some(Self::Ask),
            "info" => Some(Self::Info),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Rag => "rag",
            Self::Score => "score",
            Self::Ask => "ask",
            Self::Info => "info",
            Self::Health => "health",
        }
    }

    fn accepts(self, slot: FileSlot) -> bool {
        match self {
            Self::Ui | Self::Info | Self::Health => false,
            Self::Ask => slot == FileSlot::Pdf,
            Self::Rag | Self::Score => self.requires(slot),
        }
    }

    fn requires(self, slot: FileSlot) -> bool {
        match self {
            Self::Rag => matches!(slot, FileSlot::Pdf | FileSlot::Questions),
            Self::Score => matches!(slot, FileSlot::Questions | FileSlot::ExpectedAnswers),
            Self::Ui | Self::Ask | Self::Info | Self::Health => false,
        }
    }
}

fn slot_flag(slot: FileSlot) -> &'static str {
    match slot {
        FileSlot::Pdf => "--pdf",
        FileSlot::Questions => "--questions",
        FileSlot::ExpectedAnswers => "--expected",
    }
}

#[derive(Default)]
struct Args {
    api_url: Option<String>,
    question: Option<String>,
    files: Vec<(FileSlot, PathBuf)>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--api-url" => {
                    parsed.api_url = Some(require_value(args, "--api-url")?);
                    continue;
                }
                "--question" if cmd == Command::Ask => {
                    parsed.question = Some(require_value(args, "--question")?);
                    continue;
                }
                "--question" => {
                    return Err(ArgsError::NotAllowed {
                        command: cmd.name(),
                        flag: "--question",
                    });
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--pdf" => FileSlot::Pdf,
                "--questions" => FileSlot::Questions,
                "--expected" => FileSlot::ExpectedAnswers,
                _ => return Err(ArgsError::UnknownArg(arg)),
            };
            let flag = slot_flag(slot);
            if !cmd.accepts(slot) {
                return Err(ArgsError::NotAllowed {
                    command: cmd.name(),
                    flag,
                });
            }
            let value = require_value(args, flag)?;
            parsed.files.retain(|(existing, _)| *existing != slot);
            parsed.files.push((slot, PathBuf::from(value)));
        }

        for slot in FileSlot::ALL {
            if cmd.requires(slot) && !parsed.files.iter().any(|(s, _)| *s == slot) {
                return Err(ArgsError::MissingFlag {
                    command: cmd.name(),
                    flag: slot_flag(slot),
                });
            }
        }

        if cmd == Command::Ask && parsed.question.is_none() {
            return Err(ArgsError::MissingFlag {
                command: cmd.name(),
                flag: "--question",
            });
        }

        Ok(parsed)
    }

    fn backend_config(&self) -> Result<BackendConfig, Box<dyn std::error::Error>> {
        let from_env = BackendConfig::from_env()?;
        match &self.api_url {
            Some(raw) => Ok(BackendConfig::new(raw)?.with_timeout(from_env.timeout())),
            None => Ok(from_env),
        }
    }

    fn selection(&self) -> Result<UploadSelection, Box<dyn std::error::Error>> {
        let mut selection = UploadSelection::default();
        for (slot, path) in &self.files {
            selection.select(*slot, SelectedFile::from_path(path.clone()))?;
        }
        Ok(selection)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = parsed.backend_config()?;
    info!(backend = %config.base_url(), command = cmd.name(), "starting");
    let backend = HttpBackend::new(config)?;
    let review_service = Arc::new(ReviewService::new(Arc::new(backend)));

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { review_service });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("RAG Review")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Rag => {
            let request = parsed.selection()?.rag_request().ok_or(ArgsError::MissingFlag {
                command: "rag",
                flag: "--pdf and --questions",
            })?;
            let response = review_service.generate_answers(&request).await?;
            print!("{}", answers_report(&map_answer_cards(&response.answers)));
            Ok(())
        }
        Command::Score => {
            let request = parsed
                .selection()?
                .scoring_request()
                .ok_or(ArgsError::MissingFlag {
                    command: "score",
                    flag: "--questions and --expected",
                })?;
            let response = review_service.score_answers(&request).await?;
            let metrics = response.metrics.as_ref().map(map_metrics);
            print!(
                "{}",
                scoring_report(
                    &map_scored_cards(&response.scored_answers),
                    &map_tally(&response.scored_answers),
                    metrics.as_ref(),
                )
            );
            Ok(())
        }
        Command::Ask => {
            let request = parsed
                .question
                .as_deref()
                .and_then(AskRequest::new)
                .ok_or(ArgsError::MissingFlag {
                    command: "ask",
                    flag: "a non-empty --question",
                })?;
            // Optionally swap the backend's document before asking.
            if let Some(pdf) = parsed.selection()?.get(FileSlot::Pdf) {
                let upload = review_service.load_document(pdf).await?;
                if let Some(message) = upload.message {
                    println!("{message}");
                }
            }
            let answer = review_service.ask_question(&request).await?;
            print!("{}", ask_report(&map_ask_answer(&answer)));
            Ok(())
        }
        Command::Info => {
            let info = review_service.agent_info().await?;
            print!("{}", document_report(&map_document_info(&info)));
            Ok(())
        }
        Command::Health => {
            let status = review_service.health().await?;
            match status.agent_status {
                Some(agent) => println!("{} (agent: {agent})", status.status),
                None => println!("{}", status.status),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

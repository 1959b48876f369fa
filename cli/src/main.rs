mod repl;
mod terminal;

use std::path::{Path, PathBuf};

use chat_widget::config::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use chat_widget::{
    Attachment, ChatController, EndpointError, HttpEndpoint, Locale, LocaleError, Resolution, SubmitOutcome,
    Timeouts, Translations, WidgetConfig,
};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use repl::{HELP, ReplInput};
use terminal::TerminalView;

type Controller = ChatController<HttpEndpoint, TerminalView>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("endpoint setup failed: {0}")]
    Endpoint(#[from] EndpointError),
    #[error("could not read {path}: {source}")]
    ReadFile { path: String, source: std::io::Error },
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
    #[error(transparent)]
    Locale(#[from] LocaleError),
    #[error("nothing to send; pass a message or --attach")]
    EmptySubmission,
    #[error("request did not produce an answer")]
    Unanswered,
}

#[derive(Parser, Debug)]
#[command(name = "chat-widget", about = "Terminal host for the chat widget panel")]
struct Cli {
    #[arg(long, env = "CHAT_ENDPOINT_URL", default_value = DEFAULT_ENDPOINT_URL)]
    endpoint: String,

    #[arg(long, env = "CHAT_LOCALE", default_value = "en")]
    locale: Locale,

    #[arg(long, help = "JSON translation table overriding the built-in strings for --locale")]
    translations: Option<PathBuf>,

    #[arg(long, env = "CHAT_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout_secs: u64,

    #[arg(long, env = "CHAT_CONNECT_TIMEOUT_SECS", default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS)]
    connect_timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default).
    Chat,
    /// Send one message and exit non-zero unless it was answered.
    Ask {
        #[arg(long)]
        attach: Option<PathBuf>,
        message: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WidgetConfig {
        endpoint_url: cli.endpoint,
        locale: cli.locale,
        timeouts: Timeouts { request_secs: cli.request_timeout_secs, connect_secs: cli.connect_timeout_secs },
    };
    let translations = load_translations(config.locale, cli.translations.as_deref()).await?;
    let endpoint = HttpEndpoint::from_config(&config)?;
    tracing::debug!(url = endpoint.url(), locale = config.locale.code(), "chat endpoint configured");

    let mut controller = ChatController::new(endpoint, TerminalView::new(), translations);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => run_chat(&mut controller).await,
        Command::Ask { attach, message } => run_ask(&mut controller, attach, &message.join(" ")).await,
    }
}

async fn load_translations(locale: Locale, path: Option<&Path>) -> Result<Translations, CliError> {
    let Some(path) = path else {
        return Ok(Translations::for_locale(locale));
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;
    Ok(Translations::from_json(&raw)?)
}

async fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let payload = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ReadFile { path: path.display().to_string(), source })?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    let attachment = Attachment::new(name, payload);
    Ok(match mime_guess::from_path(path).first_raw() {
        Some(mime) => attachment.with_mime(mime),
        None => attachment,
    })
}

async fn run_ask(controller: &mut Controller, attach: Option<PathBuf>, message: &str) -> Result<(), CliError> {
    if let Some(path) = attach {
        let file = read_attachment(&path).await?;
        controller.stage_attachment(file);
    }

    match controller.submit(message).await {
        SubmitOutcome::Resolved(Resolution::Answer) => Ok(()),
        SubmitOutcome::Resolved(_) => Err(CliError::Unanswered),
        SubmitOutcome::Ignored | SubmitOutcome::Busy => Err(CliError::EmptySubmission),
    }
}

async fn run_chat(controller: &mut Controller) -> Result<(), CliError> {
    println!("{HELP}");
    controller.toggle();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match repl::parse_line(&line) {
            ReplInput::Submit(text) => {
                if !controller.session().panel().is_expanded() {
                    println!("(panel is closed; /toggle to open it)");
                    continue;
                }
                controller.submit(&text).await;
            }
            ReplInput::Attach(path) => match read_attachment(&path).await {
                Ok(file) => controller.stage_attachment(file),
                Err(e) => eprintln!("{e}"),
            },
            ReplInput::Toggle => {
                controller.toggle();
            }
            ReplInput::Help => println!("{HELP}"),
            ReplInput::Quit => break,
            ReplInput::Unknown(input) => println!("unknown command: {input}\n{HELP}"),
        }
    }
    Ok(())
}

//! Command-line surface for the URL shortener client.
//!
//! # Usage
//!
//! ```bash
//! # Shorten one URL and copy the result
//! cargo run -- shorten https://www.youtube.com/watch?v=Y4z3psSbMEo --copy
//!
//! # Shorten with a custom id
//! cargo run -- shorten https://example.com --custom-id promo2025
//!
//! # Prompt for URLs until you quit
//! cargo run -- interactive
//!
//! # Land here after a failed short link redirect
//! cargo run -- --page-url "http://localhost:3001/?error=invalid-url"
//! ```
//!
//! # Environment Variables
//!
//! See [`url_shortener_client::config`]. A `.env` file is loaded if present.

use url_shortener_client::application::services::{
    Submission, SubmissionService, SubmissionState, WorkflowSettings,
};
use url_shortener_client::config::Config;
use url_shortener_client::domain::gateways::Clipboard;
use url_shortener_client::domain::redirect_error::PageContext;
use url_shortener_client::infrastructure::clipboard::{NullClipboard, SystemClipboard};
use url_shortener_client::infrastructure::http::HttpShortenerClient;
use url_shortener_client::{telemetry, terminal};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::process::ExitCode;
use std::sync::Arc;

type Service = SubmissionService<HttpShortenerClient>;

/// Terminal client for a URL shortening service.
#[derive(Parser)]
#[command(name = "url-shortener-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shortening service origin (overrides SHORTENER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// URL this session was opened at, e.g. after a failed short link redirect
    #[arg(long, global = true)]
    page_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Shorten {
        /// The long URL to shorten
        long_url: String,

        /// Custom short id (letters and digits, at most 9 characters)
        #[arg(short, long, default_value = "")]
        custom_id: String,

        /// Copy the short URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Prompt for URLs until you quit (default)
    Interactive,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    config.validate()?;

    telemetry::init(&config);
    config.print_summary();

    let client = HttpShortenerClient::new(&config.api_url, config.request_timeout())
        .context("Failed to build HTTP client")?;
    let mut service = SubmissionService::new(
        Arc::new(client),
        connect_clipboard(),
        WorkflowSettings::from(&config),
    );

    let page = match cli.page_url.as_deref() {
        Some(url) => {
            PageContext::from_url(url).with_context(|| format!("Invalid --page-url '{url}'"))?
        }
        None => PageContext::default(),
    };
    service.mount(&page);
    print_display(&mut service);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Shorten {
            long_url,
            custom_id,
            copy,
        } => shorten_once(&mut service, long_url, custom_id, copy).await,
        Commands::Interactive => run_interactive(&mut service).await,
    }
}

/// Opens the system clipboard, falling back to [`NullClipboard`].
fn connect_clipboard() -> Arc<dyn Clipboard> {
    match SystemClipboard::connect() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            tracing::warn!("{}. Copying will not be possible.", e);
            Arc::new(NullClipboard::new(e.to_string()))
        }
    }
}

/// Runs one submit cycle, rendering the pending trigger while the request is
/// in flight. Returns `true` if a short URL is now displayed.
async fn submit(service: &mut Service) -> bool {
    let request = match service.begin_submit() {
        Submission::Dispatched(request) => request,
        Submission::Rejected(_) | Submission::Ignored => {
            print_display(service);
            return false;
        }
    };

    println!("{}", terminal::render_submit_trigger(service.display()));

    let outcome = service.dispatch(&request).await;
    let succeeded = matches!(
        service.complete_submit(outcome),
        SubmissionState::Succeeded(_)
    );

    print_display(service);
    succeeded
}

async fn shorten_once(
    service: &mut Service,
    long_url: String,
    custom_id: String,
    copy: bool,
) -> Result<ExitCode> {
    service.set_long_url(long_url);
    service.set_custom_id(custom_id);

    if !submit(service).await {
        return Ok(ExitCode::FAILURE);
    }

    if copy {
        service.copy_short_url();
        print_notices(service);
    }

    Ok(ExitCode::SUCCESS)
}

/// Prompt loop mirroring the form: long URL, optional custom id, submit,
/// result, copy.
async fn run_interactive(service: &mut Service) -> Result<ExitCode> {
    println!("{}", "✂️  Make it Short...!".bright_blue().bold());
    println!();

    loop {
        let long_url: String = Input::new()
            .with_prompt("Enter a long URL")
            .with_initial_text(service.long_url())
            .allow_empty(true)
            .interact_text()?;

        let custom_id: String = Input::new()
            .with_prompt("Custom ID (optional)")
            .allow_empty(true)
            .interact_text()?;

        service.set_long_url(long_url);
        service.set_custom_id(custom_id);
        println!();

        if submit(service).await {
            let copy = Confirm::new()
                .with_prompt("Copy to clipboard?")
                .default(true)
                .interact()?;

            if copy {
                service.copy_short_url();
                print_notices(service);
            }
        }

        println!();
        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(true)
            .interact()?;

        if !again {
            break;
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

fn print_display(service: &mut Service) {
    for line in terminal::render_display(service.display()) {
        println!("{line}");
    }
    print_notices(service);
}

fn print_notices(service: &mut Service) {
    for notice in service.take_notices() {
        println!("{}", terminal::render_notice(&notice));
    }
}

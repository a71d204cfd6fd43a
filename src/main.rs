//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run.
//! No business logic here; resolution and rendering live in usecases.

use clap::{Parser, Subcommand};
use gavel::adapters::calendar::HttpCalendarFeed;
use gavel::adapters::github::GithubTracker;
use gavel::adapters::secrets::KeyringStore;
use gavel::ports::{CalendarFeedPort, IssueTrackerPort, SecretKey, SecretStorePort};
use gavel::shared::config::AppConfig;
use gavel::usecases::AgendaService;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "gavel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set the tracker access token used to query agenda issues
    Token { token: String },
    /// Set the calendar feed URL the meeting is resolved from
    CalendarUrl { url: String },
    /// Generate the agenda for the next Board meeting and print it to stdout
    Agenda,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = AppConfig::load().unwrap_or_default();
    let secrets = KeyringStore::new();
    let cli = Cli::parse();

    // Errors surface as one warning line on stderr; the process still exits
    // zero, matching the command surface contract.
    match cli.command {
        Commands::Token { token } => match secrets.set(SecretKey::TrackerToken, &token) {
            Ok(()) => eprintln!("Token set successfully."),
            Err(e) => eprintln!("Failed to set token: {e}"),
        },
        Commands::CalendarUrl { url } => match secrets.set(SecretKey::CalendarUrl, &url) {
            Ok(()) => eprintln!("Calendar URL set successfully."),
            Err(e) => eprintln!("Failed to set calendar URL: {e}"),
        },
        Commands::Agenda => match generate_agenda(&cfg, &secrets).await {
            Ok(agenda) => {
                println!("{agenda}");
                eprintln!("Agenda generated successfully.");
            }
            Err(e) => eprintln!("Failed to generate agenda: {e}"),
        },
    }

    Ok(())
}

/// Resolve secrets, wire the adapters, run one generation pass.
async fn generate_agenda(cfg: &AppConfig, secrets: &dyn SecretStorePort) -> anyhow::Result<String> {
    let token = secrets
        .get(SecretKey::TrackerToken)?
        .ok_or_else(|| anyhow::anyhow!("No token found, run 'gavel token <token>' first."))?;

    // Env/config override wins over the stored secret
    let calendar_url = match cfg.calendar_url.clone() {
        Some(url) => url,
        None => secrets.get(SecretKey::CalendarUrl)?.ok_or_else(|| {
            anyhow::anyhow!("No calendar URL found, run 'gavel calendar-url <url>' first.")
        })?,
    };
    debug!(url = %calendar_url, "using calendar feed");

    let calendar: Arc<dyn CalendarFeedPort> = Arc::new(HttpCalendarFeed::new(calendar_url));
    let tracker: Arc<dyn IssueTrackerPort> = Arc::new(GithubTracker::new(
        cfg.api_base_or_default(),
        cfg.tracker_owner_or_default(),
        token,
    ));

    let service = AgendaService::new(calendar, tracker);
    let agenda = service.generate(chrono::Utc::now().naive_utc()).await?;
    Ok(agenda)
}

//! foreman CLI
//!
//! Command-line tools for the Foreman infrastructure-management API

use clap::{Parser, Subcommand};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use foreman_api::responses::Host;
use foreman_client::{Credentials, DEFAULT_URL, Session, SessionConfig};

mod report;

#[derive(Parser)]
#[command(name = "foreman")]
#[command(version, about = "Command line tools for Foreman", long_about = None)]
struct Cli {
    /// Foreman server URL
    #[arg(long, global = true, env = "FOREMAN_URL", default_value = DEFAULT_URL)]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List resources
    List {
        #[command(subcommand)]
        resource: ListResource,
    },
    /// Power on a host
    Start {
        #[command(subcommand)]
        target: PowerTarget,
    },
    /// Power off a host
    Stop {
        #[command(subcommand)]
        target: PowerTarget,
    },
}

#[derive(Subcommand)]
enum ListResource {
    /// All managed hosts, with the age of their last report
    Hosts,
}

#[derive(Subcommand)]
enum PowerTarget {
    /// A single host, by name
    Host { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Rows go to stdout; keep logs on stderr so listings stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let session = Session::new(SessionConfig {
        base_url: cli.url,
        credentials: Credentials::from_env(),
        ..SessionConfig::default()
    })?;

    match cli.command {
        Commands::List {
            resource: ListResource::Hosts,
        } => list_hosts(&session).await,
        Commands::Start {
            target: PowerTarget::Host { name },
        } => power(&session, &name, "start").await,
        Commands::Stop {
            target: PowerTarget::Host { name },
        } => power(&session, &name, "stop").await,
    }
}

async fn list_hosts(session: &Session) -> Result<()> {
    let (total, mut hosts) = session.get_all::<Host>("hosts", &[]).await?;
    tracing::debug!(total, "listing hosts");

    let now = chrono::Utc::now();
    while let Some(host) = hosts.next().await {
        println!("{}", report::render_row(&host?, now));
    }
    Ok(())
}

async fn power(session: &Session, host: &str, action: &str) -> Result<()> {
    let response = session.power(host, action).await?;
    println!("{response}");
    Ok(())
}

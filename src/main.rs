//! Documentation site host.
//!
//! ```text
//!   faq-site serve   [--config site.toml]   run the HTTP host
//!   faq-site routes  [--config site.toml]   list mounted routes
//!   faq-site sitemap [--config site.toml]   print the XML sitemap
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use faq_site::config::{load_or_default, SiteConfig};
use faq_site::http::{response, HttpServer};
use faq_site::lifecycle::{build_registry, Shutdown};
use faq_site::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "faq-site")]
#[command(about = "Serve and inspect the documentation FAQ routes", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP host
    Serve,
    /// Print every mounted route as "<url>\t<title>"
    Routes,
    /// Print the XML sitemap
    Sitemap,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Routes => {
            let registry = build_registry(&config)?;
            for link in registry.links() {
                println!("{}\t{}", link.url, link.title);
            }
        }
        Commands::Sitemap => {
            let registry = build_registry(&config)?;
            print!("{}", response::sitemap(&config.site.base_url, &registry.links()));
        }
    }

    Ok(())
}

async fn serve(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging(&config.observability);

    tracing::info!("faq-site v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let registry = build_registry(&config).inspect_err(|e| {
        tracing::error!(error = %e, "Invalid route configuration");
    })?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, registry);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

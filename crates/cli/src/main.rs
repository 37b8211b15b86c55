use clap::Parser;
use rbl_check_api::AppState;
use rbl_check_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rbl-check")]
#[command(version)]
#[command(about = "RBL Check - query an IPv4 address against DNS blackhole lists over HTTP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP API port
    #[arg(short = 'p', long, env = "API_PORT")]
    port: Option<String>,

    /// Comma-separated RBL zones to query
    #[arg(short = 'z', long, env = "RBL_DNS_LOOKUP", value_name = "ZONES")]
    zones: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An empty API_PORT falls back to the configured port
    let api_port = match cli.port.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid port '{}': {}", raw, e))?,
        ),
    };

    // Load configuration
    let cli_overrides = CliOverrides {
        api_port,
        bind_address: cli.bind,
        zones: cli.zones,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config.logging);

    info!("Starting RBL Check v{}", env!("CARGO_PKG_VERSION"));

    // Dependency Injection - Build all dependencies
    let use_cases = di::UseCases::new(&config);

    let app_state = AppState {
        query_zones: use_cases.query_zones,
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.api_port).parse()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}

//! Command-line access to the WSDOT APIs.
//!
//! Each subcommand calls one endpoint and prints the decoded result as
//! pretty JSON on stdout. Logs go to stderr (`RUST_LOG`, default `info`).

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use wsdot::{WsdotClient, WsdotConfig, WsdotError};

/// Query the WSDOT traveler information APIs.
#[derive(Debug, Parser)]
#[command(name = "wsdot")]
struct Cli {
    /// API key from the WSDOT traveler information site.
    #[arg(long, env = "WSDOT_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every highway camera.
    Cameras,

    /// Show one highway camera.
    Camera {
        /// Camera ID.
        id: i64,
    },

    /// List basic details of every ferry.
    Vessels,

    /// List current ferry positions.
    Locations,

    /// List scheduled ferry routes.
    Routes,

    /// Show today's sailings for a route.
    Today {
        /// Route ID (see `routes`).
        route_id: i64,

        /// Only include sailings that have not yet departed.
        #[arg(long)]
        remaining: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), WsdotError> {
    let config = WsdotConfig::new(cli.api_key).with_timeout(cli.timeout);
    let client = WsdotClient::new(config)?;

    match cli.command {
        Command::Cameras => print_json(&client.cameras().get_cameras().await?),
        Command::Camera { id } => print_json(&client.cameras().get_camera(id).await?),
        Command::Vessels => print_json(&client.ferries().get_vessel_basics().await?),
        Command::Locations => print_json(&client.ferries().get_vessel_locations().await?),
        Command::Routes => print_json(&client.ferries().get_route_schedules().await?),
        Command::Today {
            route_id,
            remaining,
        } => print_json(
            &client
                .ferries()
                .get_schedule_today_by_route(route_id, remaining)
                .await?,
        ),
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to render output: {e}");
            process::exit(1);
        }
    }
}

use arp_resolver_application::ArpResolver;
use arp_resolver_domain::{CliOverrides, HardwareAddr};
use arp_resolver_infrastructure::LinuxArpReader;
use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

mod bootstrap;

#[derive(Parser)]
#[command(name = "arp-resolver")]
#[command(version)]
#[command(about = "Look up IP and hardware addresses in the system ARP cache")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Neighbor table snapshot file
    #[arg(long, value_name = "PATH")]
    snapshot: Option<String>,

    /// Minimum time between table reads, in milliseconds
    #[arg(long, value_name = "MS")]
    ttl_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the hardware address recorded for an IP address
    Mac { ip: IpAddr },

    /// Print the IP address recorded for a hardware address
    Ip { hw: HardwareAddr },

    /// Print every resolved neighbor
    Dump,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        ttl_ms: cli.ttl_ms,
        snapshot_path: cli.snapshot.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        snapshot = %config.resolver.snapshot_path,
        ttl_ms = config.resolver.ttl_ms,
        "Resolver configured"
    );

    let reader = LinuxArpReader::with_path(config.resolver.snapshot_path.clone());
    let resolver = ArpResolver::new(Arc::new(reader), config.resolver.ttl());

    match cli.command {
        Command::Mac { ip } => {
            let hw = resolver.lookup_mac(ip).await?;
            println!("{}", hw);
        }
        Command::Ip { hw } => {
            let ip = resolver.lookup_ip(&hw).await?;
            println!("{}", ip);
        }
        Command::Dump => {
            let table = resolver.table().await?;
            for (ip, hw) in table.neighbors() {
                println!("{:<40} {}", ip, hw);
            }
            debug!(entries = table.len(), "Neighbor table dumped");
        }
    }

    Ok(())
}

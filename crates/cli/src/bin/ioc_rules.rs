use clap::Parser;
use honeyzone::{bootstrap, di};
use honeyzone_domain::CliOverrides;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ioc-rules")]
#[command(version)]
#[command(about = "Fetch an IOC feed and write matching entries as IDS rules")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Feed URL
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// Rules output file
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        feed_url: cli.url,
        output_path: cli.output,
        log_level: cli.log_level,
        ..CliOverrides::default()
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let services = di::FeedServices::new(&config)?;

    match services.generate_rules.execute().await {
        Ok(summary) => {
            info!(entries = summary.entries, rules = summary.rules, "IOC rules generated");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, url = %config.feed.url, "IOC rule generation failed");
            Err(e.into())
        }
    }
}

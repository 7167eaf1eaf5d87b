use ab_stats::cli::{Cli, OutputFormat};
use ab_stats::{experiment, report};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = cli.to_config();
    let outcome = experiment::run(&config)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_report(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

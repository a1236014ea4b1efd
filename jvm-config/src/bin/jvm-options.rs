use clap::Parser;
use eyre::{Result, WrapErr};
use jvm_config::cli::Args;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = args
        .load_config()
        .wrap_err("Failed to load JVM configuration")?;

    tracing::info!(
        "Resolved JVM configuration for {} with {} extra options",
        config.platform(),
        config.extra_options().len()
    );

    let output = args
        .format
        .render(&config.launch_args())
        .wrap_err("Failed to render JVM options")?;
    println!("{output}");

    Ok(())
}

use clap::Parser;
use color_eyre::Result;
use std::io;
use textstats::cli::{self, Cli};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Diagnostics go to stderr; quiet unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();
    cli::run(&cli, &mut out)?;

    Ok(())
}

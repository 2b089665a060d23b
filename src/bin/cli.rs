// src/bin/cli.rs
use color_eyre::eyre::eyre;
use vacancy_stats::{cli, log::{self, LogTarget}};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(LogTarget::Stderr).map_err(|e| eyre!(e))?;
    cli::run().map_err(|e| eyre!(e))
}

extern crate env_logger;
#[macro_use]
extern crate log;

use std::io::{stdin, stdout};
use std::path::Path;

use anyhow::Result;
use clap::Parser;

mod catalog;
mod cli;
mod dataset;
mod gc;
mod query;
mod record;

use cli::Cli;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    info!("gcq v{}", cli::VERSION);

    let records = dataset::load(Path::new(&cli.archive))?;

    query::run(&records, &mut stdin().lock(), &mut stdout().lock())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use rankbench::cliopt::CliOpt;
use rankbench::output::LineWriter;
use rankbench::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let default_filter = if opt.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let reader: Box<dyn BufRead> = match &opt.path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut runner = Runner::from_opt(&opt, reader, Box::new(LineWriter::new(io::stdout())))?;
    runner.run()?;

    Ok(())
}

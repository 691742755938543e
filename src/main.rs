
use intstack::driver::Driver;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufReader};

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let mut driver = Driver::new();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  match std::env::args_os().nth(1) {
    Some(path) => {
      let file = File::open(&path)
        .with_context(|| format!("could not open {}", path.to_string_lossy()))?;
      driver.run(BufReader::new(file), &mut out)?;
    }
    None => {
      driver.run(io::stdin().lock(), &mut out)?;
    }
  }
  Ok(())
}

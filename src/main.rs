use std::io;

use tracing_subscriber::EnvFilter;

use people_cache::{config::load_config, runner::Runner, store::memory::MemoryStore};

fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(config.log_level.as_deref().unwrap_or("info"));
    tracing::info!(name = config.name.as_deref(), "starting demo");

    let mut runner = Runner::new(MemoryStore::new());
    runner.run(&mut io::stdout())?;

    Ok(())
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

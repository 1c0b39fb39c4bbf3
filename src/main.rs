mod replay;

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use replay::ReplayApp;
use replay::core::ReplayConfig;

fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ReplayConfig::load(&path)?,
        None => ReplayConfig::default(),
    };

    ReplayApp::new(config).run()?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise show the replay summary and drag commits.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("replay=info,trackball=debug"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

use anyhow::{Context, Result};
use peerwatch::{Args, PeerWatch};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    PeerWatch::run(args).await.context("run peerwatch")?;

    Ok(())
}

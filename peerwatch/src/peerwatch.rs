use crate::{config::Config, shutdown, Args, Watcher};
use anyhow::{Context, Result};
use peerwatch_rpc_client::{build_http_client, RpcClient};

pub struct PeerWatch;

impl PeerWatch {
    pub async fn run(args: Args) -> Result<()> {
        let shutdown = shutdown::listen().context("listen for termination signals")?;

        let cfg = Config::load(&args.config_path)
            .await
            .context("read config")?
            .validate()
            .context("validate config")?;

        let http_client = build_http_client(&cfg.rpc_client).context("build http client")?;

        log::info!(
            "polling {} every {}s",
            cfg.rpc_client.url,
            cfg.interval.as_secs()
        );

        let rpc_client = RpcClient::new(http_client, cfg.rpc_client);

        Watcher::new(rpc_client, cfg.interval).run(shutdown).await;

        Ok(())
    }
}

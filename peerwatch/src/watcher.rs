use std::time::Duration;

use peerwatch_rpc_client::RpcClient;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

pub struct Watcher {
    rpc_client: RpcClient,
    interval: Duration,
}

impl Watcher {
    pub fn new(rpc_client: RpcClient, interval: Duration) -> Self {
        Self {
            rpc_client,
            interval,
        }
    }

    /// Polls the peer count every interval until `shutdown` is cancelled.
    ///
    /// The first poll happens one interval after start. A call that overruns the
    /// interval delays the next tick instead of queueing extra ones, and calls
    /// are never in flight at the same time.
    pub async fn run(self, shutdown: CancellationToken) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    log::info!("Shutdown signal received, exiting...");
                    return;
                }
                _ = ticker.tick() => self.tick().await,
            }
        }
    }

    async fn tick(&self) {
        match self.rpc_client.peer_count().await {
            Ok(peers) => log::info!("Number of Geth peers: {}", peers),
            Err(e) => log::error!("Error sending request: {}", e),
        }
    }
}

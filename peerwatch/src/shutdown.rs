use std::io;

use tokio_util::sync::CancellationToken;

/// Registers the termination signal handlers and returns a token that is
/// cancelled when the first of them arrives.
///
/// Handlers are registered before returning, so a failure to listen for
/// signals surfaces as a startup error instead of a process that can't be stopped.
pub fn listen() -> io::Result<CancellationToken> {
    let token = CancellationToken::new();
    let signals = Signals::register()?;

    let cancel = token.clone();
    tokio::spawn(async move {
        let name = signals.recv().await;
        log::debug!("received {}", name);
        cancel.cancel();
    });

    Ok(token)
}

#[cfg(unix)]
struct Signals {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl Signals {
    fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    async fn recv(mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }
}

#[cfg(not(unix))]
struct Signals;

#[cfg(not(unix))]
impl Signals {
    fn register() -> io::Result<Self> {
        Ok(Self)
    }

    async fn recv(self) -> &'static str {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for ctrl-c: {}", e);
        }
        "ctrl-c"
    }
}

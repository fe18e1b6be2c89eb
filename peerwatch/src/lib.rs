mod args;
mod config;
mod peerwatch;
mod shutdown;
mod watcher;

pub use args::Args;
pub use config::{Config, ConfigError, WatchConfig};
pub use peerwatch::PeerWatch;
pub use watcher::Watcher;

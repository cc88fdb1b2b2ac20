pub mod watch_config;

pub use watch_config::WatchConfig;

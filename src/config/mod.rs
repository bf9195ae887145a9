mod config;
mod fingerprint;

pub use config::{AppConfig, RegistrySettings};
pub use fingerprint::{ConsumerMode, FillStrategy, FingerprintConfig};

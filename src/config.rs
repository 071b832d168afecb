//! Configuration loader and defaults for the groverweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). Fields cover the listening address
//! (`host`, `port`), the development `debug` flag, and the `base_dir` the
//! on-disk asset tree hangs off.
//!
use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Default listen host, all interfaces
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
const DEFAULT_PORT: u16 = 5000;

/// Default debug flag; enables template reload on every request
const DEFAULT_DEBUG: bool = true;

/// Application configuration for the web server
pub struct Config {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Debug mode, re-reads templates from disk per request
    pub debug: bool,
    /// Directory the `templates/` and `static/` trees live under
    pub base_dir: PathBuf,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    host: env::var("GROVERWEB_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
    port: env::var("GROVERWEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT),
    debug: env::var("GROVERWEB_DEBUG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DEBUG),
    base_dir: env::var("GROVERWEB_BASE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_base_dir()),
});

/// Resolve the default base directory, the directory holding the executable
fn default_base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

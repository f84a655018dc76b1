// src/util/testing.rs

use std::env;
use std::sync::OnceLock;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes test logging exactly once.
pub fn init_test_env() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        setup_test_logging();
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Saves and restores the environment variables the crate reads.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_url: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_url: env::var("PROMPTSTASH_DB_URL").ok(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var("PROMPTSTASH_DB_URL");
        if let Some(val) = &self.db_url {
            env::set_var("PROMPTSTASH_DB_URL", val);
        }
    }
}

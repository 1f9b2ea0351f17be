//! # Demo: wqdemo
//!
//! Starts a worker that sleeps for a few seconds, then immediately stops it.
//!
//! ## Flow
//! ```text
//! Supervisor::start()
//!   ├─► spawn "wqdemod"
//!   ├─► wait for readiness        → [worker-ready]
//! Supervisor::stop()
//!   ├─► worker wakes up           → [worker-exited]
//!   └─► rendezvous + release      → [shutdown-completed] exit_code=0
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example wqdemo
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use workgate::{Config, LogWriter, Supervisor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let cfg = Config {
        work: Duration::from_secs(3),
        ..Config::default()
    };
    let mut sup = Supervisor::new(cfg, vec![Arc::new(LogWriter::new())]);

    sup.start()?;
    if let Some(report) = sup.stop() {
        println!("{} exited with status {}", report.worker, report.exit_code);
    }
    Ok(())
}

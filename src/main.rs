//! ds1620-monitor: Live console readout for a DS1620 temperature sensor
//!
//! Polls the sysfs attribute exported by the ds1620 kernel module and keeps
//! one terminal line updated with the latest reading. Ctrl-C prints the last
//! reading on its own line and exits.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// === Modules ===

mod display;
mod sensor;

// === Constants ===

/// Sysfs attribute exported by the ds1620 kernel module.
const SENSOR_PATH: &str = "/sys/sensors/ds1620/temperature";

/// Delay between successive sensor reads.
const POLL_INTERVAL: Duration = Duration::from_secs(3);

// === Entry point ===

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Watching {} every {:?}", SENSOR_PATH, POLL_INTERVAL);

    let mut reading: f64 = 0.0;

    // Race the poll loop against Ctrl-C. The loop only completes on a read
    // or parse failure, which propagates as the process exit status; the
    // interrupt drops the loop future, so no further reads happen.
    tokio::select! {
        res = poll(&mut reading) => return res,
        res = tokio::signal::ctrl_c() => res?,
    }

    tracing::info!("Interrupted, exiting");
    display::print_final(&mut std::io::stdout(), reading)?;
    Ok(())
}

/// Read, display, sleep, forever. Only ever returns on a failed sample.
async fn poll(reading: &mut f64) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    loop {
        sample(SENSOR_PATH, &mut stdout, reading)?;
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// One iteration: read the sensor, store the value, rewrite the line.
fn sample(path: impl AsRef<Path>, out: &mut impl Write, reading: &mut f64) -> anyhow::Result<()> {
    *reading = sensor::read_temperature(path)?;
    display::print_reading(out, *reading)?;
    Ok(())
}

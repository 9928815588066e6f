use name_pipelines::telemetry::{self, TelemetryConfig};
use std::io::{self, Write};

fn main() -> name_pipelines::Result<()> {
    telemetry::init(&TelemetryConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    name_pipelines::run_all(&mut out)?;
    out.flush()?;

    Ok(())
}

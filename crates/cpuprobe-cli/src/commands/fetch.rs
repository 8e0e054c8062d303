//! Default mode: emit current counter values.

use std::io::Write;

use cpuprobe_core::{ProbeConfig, normalize, stat};

pub fn run(config: &ProbeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let text = stat::read_source(&config.stat_path)?;
    let counters = stat::aggregate_counters(&text, &config.stat_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    normalize::write_values(&mut out, &counters, config.hz)?;
    out.flush()?;
    Ok(())
}

//! `config` mode: scan the counter table and describe the graph.

use std::io::Write;

use cpuprobe_core::{ProbeConfig, descriptor, stat};

pub fn run(config: &ProbeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let text = stat::read_source(&config.stat_path)?;
    let topology = stat::detect_topology(&text, &config.stat_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    descriptor::write_config(&mut out, topology, config.scale_to_100)?;
    out.flush()?;
    Ok(())
}

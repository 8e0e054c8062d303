//! Munin-protocol CPU accounting probe.
//!
//! Invoked by the collector once per poll: `cpuprobe config` describes the
//! graph, `cpuprobe autoconf` reports whether this host can be probed, and
//! a bare `cpuprobe` emits current counter values.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use cpuprobe_core::{PROC_STAT, ProbeConfig};

#[derive(Parser)]
#[command(name = "cpuprobe")]
#[command(about = "cpuprobe — Munin-protocol probe for kernel CPU accounting counters")]
#[command(version = cpuprobe_core::VERSION)]
struct Cli {
    /// Invocation mode: `config`, `autoconf`, or omitted to fetch values.
    ///
    /// Unrecognized modes fall through to value fetching; plugin convention
    /// treats an unknown first argument as no argument at all.
    mode: Option<String>,

    /// Counter source to read instead of the kernel default.
    #[arg(long, default_value = PROC_STAT)]
    stat_path: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ProbeConfig::from_env();
    config.stat_path = cli.stat_path;

    let result = match cli.mode.as_deref() {
        Some("config") => commands::config::run(&config),
        Some("autoconf") => std::process::exit(commands::autoconf::run(&config.stat_path)),
        _ => commands::fetch::run(&config),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        let cli = Cli::try_parse_from(["cpuprobe", "config"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("config"));
        let cli = Cli::try_parse_from(["cpuprobe", "autoconf"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("autoconf"));
        let cli = Cli::try_parse_from(["cpuprobe"]).unwrap();
        assert_eq!(cli.mode, None);
    }

    #[test]
    fn unknown_mode_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["cpuprobe", "snmpconf"]).unwrap();
        assert_eq!(cli.mode.as_deref(), Some("snmpconf"));
    }

    #[test]
    fn stat_path_defaults_to_proc_stat() {
        let cli = Cli::try_parse_from(["cpuprobe"]).unwrap();
        assert_eq!(cli.stat_path, PathBuf::from(PROC_STAT));
        let cli = Cli::try_parse_from(["cpuprobe", "--stat-path", "/tmp/stat"]).unwrap();
        assert_eq!(cli.stat_path, PathBuf::from("/tmp/stat"));
    }
}

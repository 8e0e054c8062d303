//! # cpuprobe-core
//!
//! Parsing and protocol emission for a Munin-style CPU accounting probe.
//!
//! The kernel exposes cumulative per-core and aggregate CPU tick counters as
//! a line-oriented text table (`/proc/stat`). This crate turns that table
//! into the two halves of the Munin plugin protocol:
//!
//! - **config**: graph metadata (titles, bounds, per-metric blocks) sized to
//!   the detected core count and field count, see [`descriptor`].
//! - **fetch**: one `<name>.value <n>` line per counter, scaled from jiffies
//!   to percent-seconds by the `HZ` divisor, see [`normalize`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use cpuprobe_core::{ProbeConfig, stat};
//!
//! let config = ProbeConfig::from_env();
//! let text = stat::read_source(&config.stat_path)?;
//! let counters = stat::aggregate_counters(&text, &config.stat_path)?;
//! cpuprobe_core::normalize::write_values(&mut std::io::stdout(), &counters, config.hz)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Field layout varies by kernel version: the first four counters (user,
//! nice, system, idle) are always present; iowait/irq/softirq, steal, and
//! guest appear on progressively newer kernels. [`fields`] holds the
//! canonical order and the presence thresholds.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod stat;

pub use config::{PROC_STAT, ProbeConfig};
pub use error::{ProbeError, ProbeResult};
pub use stat::CpuTopology;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

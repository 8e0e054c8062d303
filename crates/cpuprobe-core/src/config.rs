//! Invocation configuration resolved once at startup.
//!
//! Munin hands settings to plugins through the environment. The probe reads
//! its two variables exactly once, up front, into a plain struct that the
//! emitters take by value — nothing reaches into the environment
//! mid-computation.

use std::path::PathBuf;

/// Default location of the kernel CPU accounting table.
pub const PROC_STAT: &str = "/proc/stat";

/// Ticks-per-second divisor used when `HZ` is absent or non-numeric.
pub const DEFAULT_HZ: u64 = 100;

/// Everything a single probe invocation needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Counter source path, normally [`PROC_STAT`].
    pub stat_path: PathBuf,
    /// Ticks-per-second divisor for jiffy-to-percent conversion.
    pub hz: u64,
    /// Normalize graphs to a 0-100% scale instead of `100 * cores`.
    pub scale_to_100: bool,
}

impl ProbeConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup.
    ///
    /// `HZ` must parse as a positive integer to take effect; anything else
    /// (absent, non-numeric, zero) falls back to [`DEFAULT_HZ`].
    /// `scaleto100` enables scale-to-100 mode only for the exact value
    /// `yes`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let hz = lookup("HZ")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&hz| hz > 0)
            .unwrap_or(DEFAULT_HZ);
        let scale_to_100 = lookup("scaleto100").as_deref() == Some("yes");
        Self {
            stat_path: PathBuf::from(PROC_STAT),
            hz,
            scale_to_100,
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            stat_path: PathBuf::from(PROC_STAT),
            hz: DEFAULT_HZ,
            scale_to_100: false,
        }
    }
}

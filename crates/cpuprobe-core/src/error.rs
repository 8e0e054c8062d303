//! Terminal error kinds for a probe invocation.
//!
//! Every failure is terminal: the process reports one diagnostic line and
//! exits non-zero. There is no retry and no partial recovery, so the error
//! surface is deliberately small.

use std::path::PathBuf;

/// Result alias used throughout the probe.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Why an invocation could not produce output.
#[derive(Debug)]
pub enum ProbeError {
    /// The counter source could not be opened or read.
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source was readable but does not look like a kernel CPU
    /// accounting table: no aggregate line, fewer than 4 counter fields,
    /// no detectable cores, or a non-numeric counter token.
    FormatUnrecognized { path: PathBuf, reason: String },
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnavailable { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            Self::FormatUnrecognized { path, reason } => {
                write!(f, "{} in {}", reason, path.display())
            }
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnavailable { source, .. } => Some(source),
            Self::FormatUnrecognized { .. } => None,
        }
    }
}

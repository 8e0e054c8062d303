//! Counter-line reading and topology detection for the kernel CPU table.
//!
//! The source is a line-oriented table: one aggregate line whose first four
//! bytes are `"cpu "`, and one `cpuN` line per core. Both carry the same
//! whitespace-separated cumulative tick counters. The table is read fresh on
//! every invocation; nothing is cached between runs.

use std::path::Path;

use crate::error::{ProbeError, ProbeResult};

/// What a config-mode scan learned about the running kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuTopology {
    /// Number of `cpuN` per-core lines.
    pub cores: usize,
    /// Number of counter fields on the aggregate line.
    pub field_count: usize,
}

/// Read the whole counter source into memory.
pub fn read_source(path: &Path) -> ProbeResult<String> {
    std::fs::read_to_string(path).map_err(|source| ProbeError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

fn unrecognized(path: &Path, reason: &str) -> ProbeError {
    ProbeError::FormatUnrecognized {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Extract the counters from the aggregate (`"cpu "`) line.
///
/// Tokens are parsed in order into an owned sequence; callers index into it
/// rather than re-scanning the line. At least the four mandatory counters
/// must be present and every token must be a decimal integer.
pub fn aggregate_counters(text: &str, path: &Path) -> ProbeResult<Vec<u64>> {
    let line = text
        .lines()
        .find(|line| line.starts_with("cpu "))
        .ok_or_else(|| unrecognized(path, "no cpu line found"))?;

    let mut counters = Vec::new();
    for token in line[4..].split_whitespace() {
        let value = token
            .parse::<u64>()
            .map_err(|_| unrecognized(path, "non-numeric counter field"))?;
        counters.push(value);
    }
    if counters.len() < 4 {
        return Err(unrecognized(path, "fewer than 4 counter fields"));
    }
    Ok(counters)
}

/// Scan every `cpu*` line once and derive core count and field count.
///
/// A line counts as a core when its fourth byte is an ASCII digit (`cpu0`,
/// `cpu17`). The field count is taken from the first aggregate-style line
/// (fourth byte is a space) and never recounted.
pub fn detect_topology(text: &str, path: &Path) -> ProbeResult<CpuTopology> {
    let mut cores = 0usize;
    let mut field_count: Option<usize> = None;

    for line in text.lines() {
        let bytes = line.as_bytes();
        if bytes.len() < 4 || !line.starts_with("cpu") {
            continue;
        }
        if bytes[3].is_ascii_digit() {
            cores += 1;
        } else if bytes[3] == b' ' && field_count.is_none() {
            field_count = Some(line[4..].split_whitespace().count());
        }
    }
    let field_count = field_count.unwrap_or(0);

    log::debug!(
        "detected {} core(s), {} accounting field(s) in {}",
        cores,
        field_count,
        path.display()
    );

    if cores < 1 {
        return Err(unrecognized(path, "no per-core cpu lines"));
    }
    if field_count < 4 {
        return Err(unrecognized(path, "fewer than 4 counter fields"));
    }
    Ok(CpuTopology { cores, field_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const FIXTURE: &str = "\
cpu  6401 334 2309 94869 1803 0 33 0 0 0
cpu0 1676 28 600 23605 276 0 11 0 0 0
cpu1 1602 93 576 23715 606 0 8 0 0 0
cpu2 1575 97 579 23786 481 0 7 0 0 0
cpu3 1547 115 552 23762 438 0 5 0 0 0
intr 561501 18 0 0 0
ctxt 1260066
btime 1739892274
";

    fn path() -> &'static Path {
        Path::new("/test/stat")
    }

    #[test]
    fn aggregate_counters_parses_in_order() {
        let counters = aggregate_counters(FIXTURE, path()).unwrap();
        assert_eq!(counters.len(), 10);
        assert_eq!(&counters[..4], &[6401, 334, 2309, 94869]);
    }

    #[test]
    fn aggregate_counters_skips_per_core_lines() {
        // cpu0 sorts before "cpu " lexically but must never match.
        let text = "cpu0 1 2 3 4\ncpu 10 20 30 40\n";
        let counters = aggregate_counters(text, path()).unwrap();
        assert_eq!(counters, vec![10, 20, 30, 40]);
    }

    #[test]
    fn missing_aggregate_line_is_unrecognized() {
        let err = aggregate_counters("cpu0 1 2 3 4\nintr 5\n", path()).unwrap_err();
        assert!(matches!(err, ProbeError::FormatUnrecognized { .. }));
        assert_eq!(err.to_string(), "no cpu line found in /test/stat");
    }

    #[test]
    fn short_aggregate_line_is_unrecognized() {
        let err = aggregate_counters("cpu  1 2 3\n", path()).unwrap_err();
        assert!(matches!(err, ProbeError::FormatUnrecognized { .. }));
    }

    #[test]
    fn garbage_counter_token_is_unrecognized() {
        let err = aggregate_counters("cpu  1 2 x 4\n", path()).unwrap_err();
        assert!(matches!(err, ProbeError::FormatUnrecognized { .. }));
    }

    #[test]
    fn topology_counts_cores_and_fields() {
        let topo = detect_topology(FIXTURE, path()).unwrap();
        assert_eq!(
            topo,
            CpuTopology {
                cores: 4,
                field_count: 10
            }
        );
    }

    #[test]
    fn topology_counts_multi_digit_cores_once() {
        let mut text = String::from("cpu  1 2 3 4\n");
        for n in 0..12 {
            text.push_str(&format!("cpu{n} 1 2 3 4\n"));
        }
        let topo = detect_topology(&text, path()).unwrap();
        assert_eq!(topo.cores, 12);
        assert_eq!(topo.field_count, 4);
    }

    #[test]
    fn topology_uses_first_aggregate_line_only() {
        let text = "cpu  1 2 3 4 5 6 7\ncpu0 1 2 3 4\ncpu 1 2 3 4\n";
        let topo = detect_topology(text, path()).unwrap();
        assert_eq!(topo.field_count, 7);
    }

    #[test]
    fn topology_without_cores_is_unrecognized() {
        let err = detect_topology("cpu  1 2 3 4\n", path()).unwrap_err();
        assert!(matches!(err, ProbeError::FormatUnrecognized { .. }));
    }

    #[test]
    fn topology_with_short_aggregate_is_unrecognized() {
        let err = detect_topology("cpu  1 2 3\ncpu0 1 2 3\n", path()).unwrap_err();
        assert!(matches!(err, ProbeError::FormatUnrecognized { .. }));
    }

    #[test]
    fn read_source_missing_file_is_unavailable() {
        let err = read_source(Path::new("/nonexistent/cpuprobe/stat")).unwrap_err();
        assert!(matches!(err, ProbeError::SourceUnavailable { .. }));
        assert!(err.to_string().starts_with("cannot open"));
    }
}

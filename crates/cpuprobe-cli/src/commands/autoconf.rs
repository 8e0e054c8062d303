//! `autoconf` mode: report whether this host can be probed.
//!
//! The capability verdict goes to stdout either way; only the exit code
//! distinguishes yes from no.

use std::fs::File;
use std::path::Path;

pub fn run(stat_path: &Path) -> i32 {
    match File::open(stat_path) {
        Ok(_) => {
            println!("yes");
            0
        }
        Err(_) => {
            println!("no ({} is not readable)", stat_path.display());
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_source_is_capable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(run(file.path()), 0);
    }

    #[test]
    fn missing_source_is_not_capable() {
        assert_eq!(run(Path::new("/nonexistent/cpuprobe/stat")), 1);
    }
}

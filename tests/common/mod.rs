#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the obs-log-analyzer binary.
#[macro_export]
macro_rules! obs_log_analyzer {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("obs-log-analyzer"))
    };
}

pub const SEPARATOR: &str = "21:00:01.000: ------------------------------------------------";

/// A clean streaming session: one scene, admin rights, no problems.
pub const HEALTHY_LOG: &str = "\
21:00:00.000: CPU Name: AMD Ryzen 7 3700X 8-Core Processor
21:00:00.001: Running as administrator: true
21:00:01.000: ------------------------------------------------
21:00:01.001: Loaded scenes:
21:00:01.002: - scene 'Main':
21:00:01.003:     - source: 'Camera' (dshow_input)
21:00:01.004: ------------------------------------------------
21:00:02.000: ==== Streaming Start ===============================================
";

/// Temporary directory holding log and config files for one test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes `content` to `name` and returns its absolute path.
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes a log made of `HEALTHY_LOG` followed by `extra` lines.
    pub fn create_log(&self, extra: &[&str]) -> PathBuf {
        let mut content = HEALTHY_LOG.to_string();
        for line in extra {
            content.push_str(line);
            content.push('\n');
        }
        self.create_file("obs.log", &content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

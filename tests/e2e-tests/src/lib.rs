// E2E Test Framework for procrun

pub mod assertions;

use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;

/// Interpreter used by every scenario that needs shell semantics.
pub const SH: &str = "/bin/sh";

static LOGGING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// Locate a system binary, trying `/bin` then `/usr/bin`.
pub fn system_binary(name: &str) -> PathBuf {
    for dir in ["/bin", "/usr/bin"] {
        let path = Path::new(dir).join(name);
        if path.exists() {
            return path;
        }
    }

    panic!("{} not found in /bin or /usr/bin", name);
}

/// Scratch directory for one scenario, removed on drop.
pub struct TestDir {
    pub test_name: String,
    dir: TempDir,
}

impl TestDir {
    pub fn new(test_name: &str) -> Self {
        init_test_logging();

        let dir = tempfile::Builder::new()
            .prefix(&format!("e2e-test-{}-", test_name))
            .tempdir()
            .expect("Failed to create test directory");

        println!("=== Test Setup ===");
        println!("Test: {}", test_name);
        println!("Test dir: {}", dir.path().display());
        println!("==================\n");

        Self {
            test_name: test_name.to_string(),
            dir,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// A path whose parent directory does not exist.
    pub fn unopenable(&self, name: &str) -> PathBuf {
        self.dir.path().join("no-such-dir").join(name)
    }

    /// Run a scenario inside this directory, printing a pass/fail banner
    /// and panicking on failure.
    pub fn run<F>(&self, scenario: F)
    where
        F: FnOnce(&TestDir) -> Result<(), String>,
    {
        match scenario(self) {
            Ok(()) => {
                println!("\n========================================");
                println!("✓ TEST PASSED: {}", self.test_name);
                println!("========================================\n");
            }
            Err(e) => {
                println!("\n========================================");
                println!("✗ TEST FAILED: {}", self.test_name);
                println!("Error: {}", e);
                println!("========================================\n");
                panic!("Test failed: {}", e);
            }
        }
    }
}

/// Shell script line that creates `marker` when run.
pub fn touch_script(marker: &Path) -> String {
    format!("echo ran > '{}'", marker.display())
}

/// Number of descriptors currently open in this process.
///
/// The directory handle used for counting is included, so only compare
/// counts taken the same way.
#[cfg(target_os = "linux")]
pub fn open_descriptor_count() -> usize {
    std::fs::read_dir("/proc/self/fd")
        .expect("Failed to list /proc/self/fd")
        .count()
}

/// Turn a boolean outcome into a scenario step result.
pub fn expect(outcome: bool, expected: bool, step: &str) -> Result<(), String> {
    if outcome == expected {
        println!("✓ {}", step);
        Ok(())
    } else {
        Err(format!("{}: expected {}, got {}", step, expected, outcome))
    }
}

//! Shared helpers for the integration suites.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use fleetdb::{Condition, Record};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Route library logs to the test harness. Set `RUST_LOG=debug` to see them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Temp directory plus the conventional inventory path inside it
pub struct TestDir {
    pub dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn inventory(&self) -> PathBuf {
        self.path("cars.txt")
    }
}

/// Write `lines` newline-terminated
pub fn write_lines(path: &Path, lines: &[&str]) {
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).expect("Failed to write dataset");
}

/// Write a dataset of `good` parseable records and `bad` malformed lines,
/// the malformed ones spread through the file
pub fn write_dataset(path: &Path, good: usize, bad: usize) {
    let models = ["Atlas", "Falcon", "Nimbus", "Aurora", "Vertex"];
    let conditions = Condition::ALL;
    let total = good + bad;
    let mut lines = Vec::with_capacity(total);
    let (mut g, mut b) = (0, 0);
    for i in 0..total {
        // Roughly even interleave
        if b < bad && (g >= good || i % (total / bad.max(1)).max(1) == 0) {
            lines.push(format!("malformed-{}", b));
            b += 1;
        } else {
            lines.push(format!(
                "car-{},{},{},{},Available",
                g + 1,
                models[g % models.len()],
                conditions[g % conditions.len()],
                1800 + (g * 37) % 5700
            ));
            g += 1;
        }
    }
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(path, contents).expect("Failed to write dataset");
}

pub fn car(id: &str, model: &str, price: f64) -> Record {
    Record::new(id, model, Condition::Good, price)
}

pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

//! Log events emitted by a derivation
//!
//! Installs a process-wide capturing logger, so this file holds a single
//! test.

use std::sync::Mutex;

use lockkey::{Deriver, KdfConfig};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.lines.lock().expect("logger mutex poisoned"))
}

#[test]
fn test_stage_events_and_failure_warning() {
    log::set_logger(&CAPTURE).expect("no other logger installed");
    log::set_max_level(LevelFilter::Debug);

    let lock = b"user@example.com";
    let key = b"correct horse battery staple";

    Deriver::new()
        .with_config(KdfConfig::low_cost())
        .derive(lock, key)
        .expect("low-cost derivation should succeed");

    let lines = take_lines();
    let debug: Vec<&str> = lines
        .iter()
        .filter(|(level, _)| *level == Level::Debug)
        .map(|(_, line)| line.as_str())
        .collect();

    assert!(debug.iter().any(|l| l.starts_with("Deriving key for lock #")));
    assert!(debug.contains(&"salt stage complete: 16-byte salt"));
    assert!(debug.contains(&"input material stage complete: 32-byte material"));
    assert!(debug.contains(&"key derivation stage complete: 32-byte key"));
    assert!(debug.iter().any(|l| l.starts_with("Signature ")));

    for (_, line) in &lines {
        assert!(!line.contains("user@example.com"));
        assert!(!line.contains("correct horse"));
    }

    let err = Deriver::new()
        .with_config(KdfConfig {
            parallelism: 0,
            ..KdfConfig::low_cost()
        })
        .derive(lock, key);
    assert!(err.is_err());

    let warnings: Vec<String> = take_lines()
        .into_iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, line)| line)
        .collect();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("error_type: lockkey::error::DerivationError"));
    assert!(warnings[0].contains("Derivation failed at configuration stage"));
}

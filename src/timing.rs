use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialize timing based on TALLYDEMO_TIMING environment variable
pub fn init() {
    if std::env::var("TALLYDEMO_TIMING").is_ok() {
        TIMING_ENABLED.store(true, Ordering::Relaxed);
    }
}

/// Check if timing is enabled
pub fn is_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

/// Log a timing message to stderr if timing is enabled
pub fn log(label: &str, duration: std::time::Duration) {
    if is_enabled() {
        eprintln!(
            "[TIMING] {}: {:.3}ms",
            label,
            duration.as_secs_f64() * 1000.0
        );
    }
}

/// A guard that logs timing when dropped
pub struct TimingGuard {
    label: &'static str,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        log(self.label, self.start.elapsed());
    }
}

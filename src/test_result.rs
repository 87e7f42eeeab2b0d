use std::time::Duration;

/// Aggregate outcome of one stress run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestResult {
    pub success: u64,
    pub failures: u64,
    pub duration: Duration,
}

impl TestResult {
    pub fn total(&self) -> u64 {
        self.success + self.failures
    }

    /// Throughput over the whole run. `None` when the run finished so fast
    /// that the measured duration is zero.
    pub fn queries_per_second(&self) -> Option<f64> {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            Some(self.total() as f64 / secs)
        } else {
            None
        }
    }
}

//! Domain constants and per-pass bookkeeping for the acceleration subsystem.

// Batch lifecycle states.
pub const BATCH_STATE_INIT: i32 = 0;
pub const BATCH_STATE_IN_PROGRESS: i32 = 1;
pub const BATCH_STATE_COMPLETE: i32 = 2;
pub const BATCH_STATE_ABORTED: i32 = 3;
pub const BATCH_STATE_RETIRED: i32 = 4;

// Result server states.
pub const RESULT_SERVER_STATE_UNSENT: i32 = 2;
pub const RESULT_SERVER_STATE_IN_PROGRESS: i32 = 4;
pub const RESULT_SERVER_STATE_OVER: i32 = 5;

// Result outcomes (meaningful once server state is OVER).
pub const RESULT_OUTCOME_UNDEFINED: i32 = 0;
pub const RESULT_OUTCOME_SUCCESS: i32 = 1;
pub const RESULT_OUTCOME_FAILURE: i32 = 3;
pub const RESULT_OUTCOME_NO_REPLY: i32 = 4;

/// Minimum successful results a batch needs before its median turnaround is
/// considered meaningful.
pub const MIN_MEDIAN_SAMPLES: usize = 100;

/// Fixed NTT penalty scored for a timed-out (no-reply) result.
pub const NO_REPLY_NTT_PENALTY: f64 = 10.0;

/// A host is low-turnaround when its mean NTT is strictly below this.
pub const LOW_TURNAROUND_MEAN_NTT: f64 = 1.0;

/// An app needs strictly more than this many distinct contributing hosts...
pub const MIN_APP_HOSTS: usize = 100;
/// ...of which strictly more than this fraction must be low-turnaround.
pub const MIN_APP_LTT_FRACTION: f64 = 0.25;

/// Only batches created inside this window feed the classifier.
pub const CLASSIFY_WINDOW_SECS: i64 = 30 * 86_400;

/// Priority that boosted workunits/results are raised to.
pub const BOOST_PRIORITY: i32 = 1;

/// Running (count, sum) of normalized turnaround times for one host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NttAccum {
    pub count: u32,
    pub sum: f64,
}

impl NttAccum {
    pub fn add(&mut self, ntt: f64) {
        self.count += 1;
        self.sum += ntt;
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClassifierSummary {
    pub batches_scanned: usize,
    pub batches_with_median: usize,
    pub hosts_sampled: usize,
    pub low_turnaround_hosts: usize,
    pub accelerable_apps: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PassSummary {
    pub classifier: ClassifierSummary,
    pub batches_examined: usize,
    pub batches_accelerated: usize,
    pub batches_completed: usize,
    pub batches_reset: usize,
    pub workunits_boosted: usize,
    pub replicas_requested: usize,
    pub results_boosted: usize,
}

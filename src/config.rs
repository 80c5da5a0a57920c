//! Simulation settings.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::error::EquityError;

/// How an equity run is carried out.
///
/// `seed = None` seeds from OS entropy. Trials are split into `workers`
/// partitions, each with its own generator; the numbers depend on the seed and
/// the partition count only, never on how many threads actually ran them.
#[derive(Clone, Debug)]
pub struct EquityConfig {
    pub trials: usize,
    pub seed: Option<u64>,
    pub repeats: usize,
    pub workers: usize,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            repeats: 1,
            workers: 1,
            cancel: None,
        }
    }
}

impl EquityConfig {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            ..Self::default()
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Zero is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Flag checked between trials; setting it aborts the run.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn validate(&self) -> Result<(), EquityError> {
        if self.trials == 0 {
            return Err(EquityError::InvalidTrialCount(self.trials));
        }
        if self.repeats == 0 {
            return Err(EquityError::InvalidRepeatCount(self.repeats));
        }
        Ok(())
    }

    /// Trial counts per partition; the first `trials % workers` get one extra.
    pub(crate) fn partition_sizes(&self) -> Vec<usize> {
        let workers = self.workers.max(1).min(self.trials.max(1));
        let base = self.trials / workers;
        let extra = self.trials % workers;
        (0..workers).map(|i| base + usize::from(i < extra)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EquityConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_counts() {
        assert_eq!(
            EquityConfig::new(0).validate(),
            Err(EquityError::InvalidTrialCount(0))
        );
        assert_eq!(
            EquityConfig::new(10).with_repeats(0).validate(),
            Err(EquityError::InvalidRepeatCount(0))
        );
    }

    #[test]
    fn partitions_cover_all_trials() {
        let sizes = EquityConfig::new(10).with_workers(4).partition_sizes();
        assert_eq!(sizes, vec![3, 3, 2, 2]);

        let sizes = EquityConfig::new(3).with_workers(8).partition_sizes();
        assert_eq!(sizes, vec![1, 1, 1]);

        assert_eq!(EquityConfig::new(5).with_workers(0).workers, 1);
    }
}

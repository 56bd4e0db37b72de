use std::error::Error;

use stepstar_search::{Observer, Outcome, SearchEngine, StepResult};

/// Observer for headless runs: reports progress through `log` instead of
/// drawing.
#[derive(Debug, Clone)]
pub struct LogObserver {
    every: usize,
    peak_frontier: usize,
}

impl LogObserver {
    /// Log an info line every `every` steps (0 disables them); every step is
    /// logged at debug level.
    pub fn new(every: usize) -> Self {
        Self {
            every,
            peak_frontier: 0,
        }
    }

    /// Largest frontier seen so far.
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Observer for LogObserver {
    fn observe(&mut self, _: &SearchEngine, step: &StepResult) -> Result<(), Box<dyn Error>> {
        self.peak_frontier = self.peak_frontier.max(step.frontier.len());
        if self.every > 0 && step.step % self.every == 0 {
            log::info!(
                "step {}: frontier {}, state {}",
                step.step,
                step.frontier.len(),
                step.state
            );
        }
        Ok(())
    }

    fn finished(&mut self, _: &SearchEngine, outcome: &Outcome) -> Result<(), Box<dyn Error>> {
        match outcome {
            Outcome::Found { path, cost, steps } => log::info!(
                "path found: {} cells, cost {cost}, {steps} steps, peak frontier {}",
                path.len(),
                self.peak_frontier
            ),
            Outcome::NoPath { steps } => log::info!("no path after {steps} steps"),
            Outcome::Interrupted { steps } => log::warn!("interrupted after {steps} steps"),
        }
        Ok(())
    }
}

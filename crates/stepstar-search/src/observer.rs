//! The driver loop and the read-only [`Observer`] seam.
//!
//! [`drive`] alternates `step` with a call into the observer, so every
//! intermediate state of the search can be rendered or recorded. Observers
//! only ever see `&SearchEngine` and cannot mutate search state.

use std::error::Error;

use stepstar_core::Point;

use crate::engine::{SearchEngine, SearchState, StepResult};
use crate::path::path_cost;

/// How a driven search ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The goal was reached; `path` runs from start to goal inclusive.
    Found {
        path: Vec<Point>,
        cost: f64,
        steps: usize,
    },
    /// The frontier was exhausted: the goal is unreachable.
    NoPath { steps: usize },
    /// The step budget ran out or the observer asked to stop.
    Interrupted { steps: usize },
}

impl Outcome {
    /// Steps taken before the search ended.
    pub fn steps(&self) -> usize {
        match self {
            Self::Found { steps, .. } | Self::NoPath { steps } | Self::Interrupted { steps } => {
                *steps
            }
        }
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// A read-only consumer of search progress, e.g. a renderer.
pub trait Observer {
    /// Called after every step with the engine and what the step did.
    fn observe(&mut self, engine: &SearchEngine, step: &StepResult) -> Result<(), Box<dyn Error>>;

    /// Called once when [`drive`] returns.
    fn finished(&mut self, _engine: &SearchEngine, _outcome: &Outcome) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    /// Polled before every step; returning `true` stops the loop.
    fn should_stop(&self) -> bool {
        false
    }
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&mut self, _: &SearchEngine, _: &StepResult) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}

/// An observer that records the sequence of expanded cells and the outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// The `current` cell of every step, in order.
    pub currents: Vec<Point>,
    /// Largest frontier seen.
    pub peak_frontier: usize,
    pub outcome: Option<Outcome>,
}

impl Observer for Trace {
    fn observe(&mut self, _: &SearchEngine, step: &StepResult) -> Result<(), Box<dyn Error>> {
        if step.state != SearchState::Failed {
            if let Some(p) = step.current {
                self.currents.push(p);
            }
        }
        self.peak_frontier = self.peak_frontier.max(step.frontier.len());
        Ok(())
    }

    fn finished(&mut self, _: &SearchEngine, outcome: &Outcome) -> Result<(), Box<dyn Error>> {
        self.outcome = Some(outcome.clone());
        Ok(())
    }
}

/// Step `engine` until it reaches a terminal state, the configured
/// `max_steps` is spent, or the observer asks to stop.
///
/// The observer sees every step. On success the path is reconstructed once
/// and reported through [`Observer::finished`] and the returned
/// [`Outcome`]. An engine that is already terminal is reported without
/// stepping.
pub fn drive<O: Observer + ?Sized>(
    engine: &mut SearchEngine,
    observer: &mut O,
) -> Result<Outcome, Box<dyn Error>> {
    let max_steps = engine.config().max_steps;

    let outcome = loop {
        match engine.state() {
            SearchState::Succeeded => {
                let path = engine.reconstruct_path()?;
                let cost = path_cost(&path);
                break Outcome::Found {
                    path,
                    cost,
                    steps: engine.steps(),
                };
            }
            SearchState::Failed => {
                break Outcome::NoPath {
                    steps: engine.steps(),
                };
            }
            SearchState::Running => {}
        }

        if max_steps.is_some_and(|max| engine.steps() >= max) || observer.should_stop() {
            log::info!("search interrupted after {} steps", engine.steps());
            break Outcome::Interrupted {
                steps: engine.steps(),
            };
        }

        let result = engine.step();
        observer.observe(engine, &result)?;
    };

    observer.finished(engine, &outcome)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SearchConfig;
    use stepstar_core::Grid;

    struct StopAfter(usize, usize);

    impl Observer for StopAfter {
        fn observe(&mut self, _: &SearchEngine, _: &StepResult) -> Result<(), Box<dyn Error>> {
            self.1 += 1;
            Ok(())
        }

        fn should_stop(&self) -> bool {
            self.1 >= self.0
        }
    }

    #[test]
    fn drive_open_grid_finds_path() {
        let mut eng =
            SearchEngine::new(Grid::new(3, 3), Point::new(0, 0), Point::new(2, 2)).unwrap();
        let mut trace = Trace::default();
        let outcome = drive(&mut eng, &mut trace).unwrap();
        let Outcome::Found { path, cost, steps } = &outcome else {
            panic!("expected a path, got {outcome:?}");
        };
        assert_eq!(path.len(), 5);
        assert_eq!(*cost, 4.0);
        assert_eq!(*steps, eng.steps());
        assert_eq!(trace.currents.len(), *steps);
        assert_eq!(trace.currents.last(), Some(&Point::new(2, 2)));
        assert_eq!(trace.outcome.as_ref(), Some(&outcome));
    }

    #[test]
    fn drive_reports_no_path() {
        let grid = Grid::parse("..#.").unwrap();
        let mut eng = SearchEngine::new(grid, Point::new(0, 0), Point::new(3, 0)).unwrap();
        let mut trace = Trace::default();
        let outcome = drive(&mut eng, &mut trace).unwrap();
        assert_eq!(outcome, Outcome::NoPath { steps: 3 });
        assert_eq!(outcome.path(), None);
        assert_eq!(trace.currents, vec![Point::new(0, 0), Point::new(1, 0)]);
    }

    #[test]
    fn max_steps_interrupts() {
        let config = SearchConfig {
            max_steps: Some(2),
            ..SearchConfig::default()
        };
        let mut eng =
            SearchEngine::with_config(Grid::new(5, 5), Point::new(0, 0), Point::new(4, 4), config)
                .unwrap();
        let outcome = drive(&mut eng, &mut NullObserver).unwrap();
        assert_eq!(outcome, Outcome::Interrupted { steps: 2 });
        assert_eq!(eng.state(), SearchState::Running);

        // The budget counts total steps, so driving again stops at once.
        let outcome = drive(&mut eng, &mut NullObserver).unwrap();
        assert_eq!(outcome.steps(), 2);
    }

    #[test]
    fn observer_can_stop_the_loop() {
        let mut eng =
            SearchEngine::new(Grid::new(5, 5), Point::new(0, 0), Point::new(4, 4)).unwrap();
        let mut stop = StopAfter(3, 0);
        let outcome = drive(&mut eng, &mut stop).unwrap();
        assert_eq!(outcome, Outcome::Interrupted { steps: 3 });
    }

    #[test]
    fn terminal_engine_is_reported_without_stepping() {
        let mut eng =
            SearchEngine::new(Grid::new(1, 1), Point::new(0, 0), Point::new(0, 0)).unwrap();
        eng.step();
        let mut trace = Trace::default();
        let outcome = drive(&mut eng, &mut trace).unwrap();
        assert_eq!(outcome.path(), Some(&[Point::new(0, 0)][..]));
        assert!(trace.currents.is_empty());
    }
}

//! Drives repeated steps for a front end.
//!
//! The runner owns the single current state and swaps it for the next one
//! after each step. Every snapshot it hands out is an `Arc` that is never
//! written again, so a renderer may read it while the next step runs.

use crate::config::clamp_delay;
use crate::rules::RuleConfig;
use crate::state::SimulationState;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared play/pause switch. Clones refer to the same flag.
#[derive(Debug, Clone, Default)]
pub struct RunningFlag(Arc<AtomicBool>);

impl RunningFlag {
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn resume(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn pause(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn toggle(&self) {
        self.0.fetch_xor(true, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Paused,
    Extinction,
    MaxGeneration,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::Paused => "Paused",
            StopReason::Extinction => "Extinction",
            StopReason::MaxGeneration => "Reached Max Generation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The flag was off when sampled; nothing ran.
    Paused,
    /// The delay since the previous tick has not elapsed yet.
    Waiting,
    Advanced,
    /// A step ran and hit a stop condition; the flag is now off.
    Stopped(StopReason),
}

pub struct Runner {
    state: Arc<SimulationState>,
    config: RuleConfig,
    delay: Duration,
    max_generations: u64,
    running: RunningFlag,
    last_tick: Option<Instant>,
}

impl Runner {
    pub fn new(state: SimulationState, config: RuleConfig, delay: Duration) -> Self {
        Self {
            state: Arc::new(state),
            config,
            delay: clamp_delay(delay),
            max_generations: 0,
            running: RunningFlag::default(),
            last_tick: None,
        }
    }

    /// Stop once `generation >= max`. Zero means no limit.
    pub fn with_max_generations(mut self, max: u64) -> Self {
        self.max_generations = max;
        self
    }

    pub fn state(&self) -> Arc<SimulationState> {
        Arc::clone(&self.state)
    }

    /// Swap in a state produced outside the runner (randomize, load, toggle, reset).
    pub fn replace(&mut self, state: SimulationState) {
        self.state = Arc::new(state);
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RuleConfig) {
        self.config = config;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = clamp_delay(delay);
    }

    pub fn running(&self) -> RunningFlag {
        self.running.clone()
    }

    /// Run one step if the flag is on when sampled.
    pub fn tick(&mut self) -> Tick {
        if !self.running.is_running() {
            return Tick::Paused;
        }

        let result = self.state.step(&self.config);
        let generation = result.state.generation();
        self.state = Arc::new(result.state);

        let reason = if self.max_generations > 0 && generation >= self.max_generations {
            Some(StopReason::MaxGeneration)
        } else if result.extinct {
            Some(StopReason::Extinction)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                self.running.pause();
                log::info!("{} at generation {}", reason, generation);
                Tick::Stopped(reason)
            }
            None => Tick::Advanced,
        }
    }

    /// Fixed-delay gate for an external event loop: ticks only when `delay`
    /// has passed since the previous tick. Every time is read from the
    /// caller's `now`.
    pub fn poll(&mut self, now: Instant) -> Tick {
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < self.delay {
                return Tick::Waiting;
            }
        }
        let tick = self.tick();
        if tick != Tick::Paused {
            self.last_tick = Some(now);
        }
        tick
    }

    /// Block until the run stops, sleeping `delay` between steps and handing
    /// every new snapshot to `observer`.
    pub fn run<F>(&mut self, mut observer: F) -> StopReason
    where
        F: FnMut(&Arc<SimulationState>),
    {
        loop {
            match self.tick() {
                Tick::Paused => {
                    log::info!("Paused at generation {}", self.state.generation());
                    return StopReason::Paused;
                }
                Tick::Stopped(reason) => {
                    observer(&self.state);
                    return reason;
                }
                Tick::Advanced => observer(&self.state),
                Tick::Waiting => unreachable!("tick does not wait on the delay"),
            }
            thread::sleep(self.delay);
        }
    }
}

use std::time::Duration;

use rand::Rng;

use crate::timers::{TimerSet, Timers};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypewriterTimings {
    pub per_char: Duration,
    /// Each keystroke lands up to this much early or late.
    pub jitter: Duration,
    /// Pause after the last character before reporting completion.
    pub settle: Duration,
}

impl TypewriterTimings {
    /// Slow and steady, for the welcome line of the intro.
    pub fn intro() -> Self {
        Self {
            per_char: Duration::from_millis(100),
            jitter: Duration::ZERO,
            settle: Duration::from_millis(1500),
        }
    }
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            per_char: Duration::from_millis(80),
            jitter: Duration::from_millis(20),
            // 800ms pause, then the flourish
            settle: Duration::from_millis(1800),
        }
    }
}

pub fn key_delay<R: Rng + ?Sized>(timings: &TypewriterTimings, rng: &mut R) -> Duration {
    let base = timings.per_char.as_secs_f64();
    let jitter = timings.jitter.as_secs_f64();
    let offset = (rng.random::<f64>() * 2.0 - 1.0) * jitter;
    Duration::from_secs_f64((base + offset).max(0.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    Idle,
    Typing,
    Settling,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTimer {
    Key,
    Settled,
}

#[derive(Debug)]
pub struct Typewriter<H> {
    text: Vec<char>,
    shown: usize,
    phase: TypePhase,
    timings: TypewriterTimings,
    timers: TimerSet<TypeTimer, H>,
}

impl<H> Typewriter<H> {
    pub fn new(text: &str, timings: TypewriterTimings) -> Self {
        Self {
            text: text.chars().collect(),
            shown: 0,
            phase: TypePhase::Idle,
            timings,
            timers: TimerSet::new(),
        }
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn visible(&self) -> String {
        self.text[..self.shown].iter().collect()
    }

    /// Returns true if the text had to be finished on the spot.
    pub fn start<T, R>(&mut self, timers: &mut T, rng: &mut R) -> bool
    where
        T: Timers<TypeTimer, Handle = H>,
        R: Rng + ?Sized,
    {
        if self.phase != TypePhase::Idle {
            return false;
        }
        self.next_key(timers, rng)
    }

    /// Returns true exactly once over the writer's life, when it finishes.
    pub fn on_timer<T, R>(&mut self, timer: TypeTimer, timers: &mut T, rng: &mut R) -> bool
    where
        T: Timers<TypeTimer, Handle = H>,
        R: Rng + ?Sized,
    {
        self.timers.release(timer);
        match (timer, self.phase) {
            (TypeTimer::Key, TypePhase::Typing) => {
                self.shown += 1;
                self.next_key(timers, rng)
            }
            (TypeTimer::Settled, TypePhase::Settling) => {
                self.phase = TypePhase::Done;
                true
            }
            _ => false,
        }
    }

    pub fn teardown<T>(&mut self, timers: &mut T)
    where
        T: Timers<TypeTimer, Handle = H>,
    {
        self.timers.cancel_all(timers);
    }

    fn next_key<T, R>(&mut self, timers: &mut T, rng: &mut R) -> bool
    where
        T: Timers<TypeTimer, Handle = H>,
        R: Rng + ?Sized,
    {
        let (timer, delay) = if self.shown < self.text.len() {
            self.phase = TypePhase::Typing;
            (TypeTimer::Key, key_delay(&self.timings, rng))
        } else {
            self.phase = TypePhase::Settling;
            (TypeTimer::Settled, self.timings.settle)
        };
        let handle = timers.timeout(delay, timer);
        if self.timers.insert(timer, handle, timers) {
            return false;
        }
        log::warn!("typewriter couldn't schedule {timer:?}");
        self.shown = self.text.len();
        self.phase = TypePhase::Done;
        true
    }
}

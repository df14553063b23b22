//! Full-screen progress overlay shown while the router moves between pages.
//!
//! The overlay is a small state machine: `Idle -> Loading -> Completing -> Idle`.
//! Every timer it schedules is tracked in a [`TimerSet`] and tagged with the
//! cycle that scheduled it, so a new navigation (or teardown) can never be
//! corrupted by callbacks left over from an earlier one.

mod messages;

pub use messages::{message_at, pick_message, MESSAGE_POOL};

use std::time::Duration;

use rand::Rng;

use crate::route_events::{Outcome, RouteSignal};
use crate::timers::{TimerSet, Timers};

pub const FULL: f64 = 100.0;
/// Progress never passes this on its own.
pub const CAP: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayTimings {
    /// Overlay stays up at least this long after navigation starts.
    pub minimum_display: Duration,
    /// A message only appears for navigations slower than this.
    pub message_reveal: Duration,
    pub tick: Duration,
    /// Pause before the bar jumps to 100 once the page is ready.
    pub snap_delay: Duration,
    pub exit_delay: Duration,
}

impl Default for OverlayTimings {
    fn default() -> Self {
        Self {
            minimum_display: Duration::from_millis(800),
            message_reveal: Duration::from_millis(300),
            tick: Duration::from_millis(100),
            snap_delay: Duration::from_millis(300),
            exit_delay: Duration::from_millis(400),
        }
    }
}

/// Next progress value on a tick: fast early, crawling near the end.
pub fn advance(progress: f64) -> f64 {
    let increment = if progress < 60.0 {
        7.0
    } else if progress < 80.0 {
        2.0
    } else if progress < 90.0 {
        0.3
    } else {
        0.1
    };
    (progress + increment).min(CAP)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Completing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    MinimumElapsed,
    RevealMessage,
    Tick,
    SnapToFull,
    Exit,
}

/// Delivered back to [`TransitionOverlay::on_timer`] when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub cycle: u64,
    pub kind: TimerKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    pub phase: Phase,
    pub progress: f64,
    pub message: Option<&'static str>,
    pub started_at: Option<Duration>,
    pub minimum_elapsed: bool,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            progress: 0.0,
            message: None,
            started_at: None,
            minimum_elapsed: false,
        }
    }
}

impl TransitionState {
    pub fn active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_ready(&self) -> bool {
        self.progress >= FULL
    }
}

#[derive(Debug)]
pub struct TransitionOverlay<H> {
    timings: OverlayTimings,
    state: TransitionState,
    cycle: u64,
    timers: TimerSet<TimerKind, H>,
}

impl<H> TransitionOverlay<H> {
    pub fn new(timings: OverlayTimings) -> Self {
        Self {
            timings,
            state: TransitionState::default(),
            cycle: 0,
            timers: TimerSet::new(),
        }
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Feeds one routing signal into the machine.
    pub fn handle<T>(&mut self, signal: RouteSignal, now: Duration, timers: &mut T)
    where
        T: Timers<Fired, Handle = H>,
    {
        match signal {
            RouteSignal::Start => self.navigation_start(now, timers),
            RouteSignal::Complete => self.navigation_finished(now, Outcome::Complete, timers),
            RouteSignal::Error => self.navigation_finished(now, Outcome::Error, timers),
        }
    }

    pub fn navigation_start<T>(&mut self, now: Duration, timers: &mut T)
    where
        T: Timers<Fired, Handle = H>,
    {
        // anything still pending belongs to a cycle we are superseding
        self.timers.cancel_all(timers);
        self.cycle += 1;
        self.state = TransitionState {
            phase: Phase::Loading,
            progress: 0.0,
            message: None,
            started_at: Some(now),
            minimum_elapsed: false,
        };
        log::debug!("transition cycle {} started", self.cycle);

        let OverlayTimings {
            minimum_display,
            message_reveal,
            tick,
            ..
        } = self.timings;
        self.schedule(TimerKind::MinimumElapsed, minimum_display, timers);
        self.schedule(TimerKind::RevealMessage, message_reveal, timers);
        let handle = timers.interval(tick, self.fired(TimerKind::Tick));
        self.timers.insert(TimerKind::Tick, handle, timers);
    }

    /// Navigation completed or failed; both dismiss the overlay the same way.
    pub fn navigation_finished<T>(&mut self, now: Duration, outcome: Outcome, timers: &mut T)
    where
        T: Timers<Fired, Handle = H>,
    {
        if self.state.phase != Phase::Loading {
            log::debug!("ignoring {outcome:?} outside of a loading cycle");
            return;
        }
        self.timers.cancel_all(timers);
        self.state.phase = Phase::Completing;

        let elapsed = self
            .state
            .started_at
            .map(|start| now.saturating_sub(start))
            .unwrap_or_default();
        let exit_in = self.exit_delay(elapsed);
        log::debug!(
            "transition cycle {} finished ({outcome:?}) after {}ms, exiting in {}ms",
            self.cycle,
            elapsed.as_millis(),
            exit_in.as_millis()
        );

        self.schedule(TimerKind::SnapToFull, self.timings.snap_delay, timers);
        if !self.schedule(TimerKind::Exit, exit_in, timers) {
            log::warn!("couldn't schedule overlay exit, closing immediately");
            self.finish(timers);
        }
    }

    fn exit_delay(&self, elapsed: Duration) -> Duration {
        let OverlayTimings {
            minimum_display,
            exit_delay,
            ..
        } = self.timings;
        if elapsed >= minimum_display || self.state.minimum_elapsed {
            exit_delay
        } else {
            minimum_display - elapsed + exit_delay
        }
    }

    pub fn on_timer<T, R>(&mut self, fired: Fired, timers: &mut T, rng: &mut R)
    where
        T: Timers<Fired, Handle = H>,
        R: Rng + ?Sized,
    {
        if fired.cycle != self.cycle {
            log::debug!("dropping stale {:?} from cycle {}", fired.kind, fired.cycle);
            return;
        }
        if fired.kind != TimerKind::Tick {
            self.timers.release(fired.kind);
        }
        match (fired.kind, self.state.phase) {
            (TimerKind::MinimumElapsed, Phase::Loading) => self.state.minimum_elapsed = true,
            (TimerKind::RevealMessage, Phase::Loading) => {
                self.state.message = Some(pick_message(rng));
            }
            (TimerKind::Tick, Phase::Loading) => self.state.progress = advance(self.state.progress),
            (TimerKind::SnapToFull, Phase::Completing) => self.state.progress = FULL,
            (TimerKind::Exit, Phase::Completing) => self.finish(timers),
            (kind, phase) => log::debug!("{kind:?} has nothing to do while {phase:?}"),
        }
    }

    /// Cancels everything; called when the overlay is unmounted.
    pub fn teardown<T>(&mut self, timers: &mut T)
    where
        T: Timers<Fired, Handle = H>,
    {
        self.finish(timers);
        // late callbacks must not match any cycle after teardown
        self.cycle += 1;
    }

    fn finish<T>(&mut self, timers: &mut T)
    where
        T: Timers<Fired, Handle = H>,
    {
        self.timers.cancel_all(timers);
        self.state = TransitionState::default();
    }

    fn fired(&self, kind: TimerKind) -> Fired {
        Fired {
            cycle: self.cycle,
            kind,
        }
    }

    fn schedule<T>(&mut self, kind: TimerKind, delay: Duration, timers: &mut T) -> bool
    where
        T: Timers<Fired, Handle = H>,
    {
        let handle = timers.timeout(delay, self.fired(kind));
        self.timers.insert(kind, handle, timers)
    }
}

//! One-time intro gate.
//!
//! On mount the gate reads a persisted "visited" flag. Returning visitors go
//! straight to the site. First-time visitors get the intro sequence, and when
//! it finishes the gate cross-fades through an opaque cover, records the
//! visit and hands control back to the page.

use std::time::Duration;

use futures::channel::oneshot;
use thiserror::Error;

use crate::timers::{TimerSet, Timers};

pub const VISIT_FLAG_KEY: &str = "hasVisitedBefore";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("couldn't read {0}")]
    Read(String),
    #[error("couldn't write {0}")]
    Write(String),
}

/// Durable home of the visit flag. There is no way to clear it.
pub trait VisitStore {
    fn has_visited(&self) -> Result<bool, StorageError>;

    fn mark_visited(&mut self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroMode {
    Animated,
    /// Shown instead of the animation when the browser asks for reduced
    /// motion (`prefers-reduced-motion: reduce`): a still welcome screen with
    /// a continue button.
    StaticWelcome,
}

impl IntroMode {
    /// Picks the intro for a browser that does or doesn't want reduced motion.
    pub fn for_motion(reduced_motion: bool) -> Self {
        if reduced_motion {
            IntroMode::StaticWelcome
        } else {
            IntroMode::Animated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Pending,
    Skipped,
    Playing(IntroMode),
    /// Cover attached, still transparent.
    Covering,
    Covered,
    /// Page content mounted beneath the opaque cover.
    Revealed,
    Uncovering,
    Done,
}

impl GatePhase {
    pub fn shows_intro(self) -> bool {
        matches!(
            self,
            GatePhase::Playing(_) | GatePhase::Covering | GatePhase::Covered
        )
    }

    pub fn shows_content(self) -> bool {
        matches!(
            self,
            GatePhase::Skipped | GatePhase::Revealed | GatePhase::Uncovering | GatePhase::Done
        )
    }

    /// Opacity of the hand-off cover, or `None` when it isn't attached.
    pub fn cover_opacity(self) -> Option<f64> {
        match self {
            GatePhase::Covering | GatePhase::Uncovering => Some(0.0),
            GatePhase::Covered | GatePhase::Revealed => Some(1.0),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroResolution {
    Skipped,
    Played,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTimer {
    CoverOpaque,
    Reveal,
    CoverFade,
    CoverRemoved,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandoffTimings {
    pub cover_in: Duration,
    pub hold: Duration,
    pub before_fade: Duration,
    pub fade_out: Duration,
}

impl Default for HandoffTimings {
    fn default() -> Self {
        Self {
            cover_in: Duration::from_millis(200),
            hold: Duration::from_millis(800),
            before_fade: Duration::from_millis(300),
            fade_out: Duration::from_millis(1000),
        }
    }
}

pub struct FirstVisitGate<S, N, H> {
    store: S,
    show_nav: N,
    phase: GatePhase,
    timings: HandoffTimings,
    done: Option<oneshot::Sender<IntroResolution>>,
    flag_written: bool,
    timers: TimerSet<GateTimer, H>,
}

impl<S, N, H> FirstVisitGate<S, N, H>
where
    S: VisitStore,
    N: FnMut(bool),
{
    pub fn new(store: S, show_nav: N, done: oneshot::Sender<IntroResolution>) -> Self {
        Self {
            store,
            show_nav,
            phase: GatePhase::Pending,
            timings: HandoffTimings::default(),
            done: Some(done),
            flag_written: false,
            timers: TimerSet::new(),
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Decides once whether the intro plays.
    pub fn mount(&mut self, mode: IntroMode) -> GatePhase {
        if self.phase != GatePhase::Pending {
            return self.phase;
        }
        let visited = self.store.has_visited().unwrap_or_else(|e| {
            log::debug!("treating visit flag as unset: {e}");
            false
        });
        if visited {
            self.phase = GatePhase::Skipped;
            (self.show_nav)(true);
            self.resolve(IntroResolution::Skipped);
        } else {
            log::info!("first visit, playing intro ({mode:?})");
            self.phase = GatePhase::Playing(mode);
            (self.show_nav)(false);
        }
        self.phase
    }

    /// Completion callback from the intro animation.
    pub fn intro_finished<T>(&mut self, timers: &mut T)
    where
        T: Timers<GateTimer, Handle = H>,
    {
        if !matches!(self.phase, GatePhase::Playing(_)) {
            log::debug!("intro finished while {:?}, ignoring", self.phase);
            return;
        }
        self.phase = GatePhase::Covering;
        self.schedule(GateTimer::CoverOpaque, self.timings.cover_in, timers);
    }

    /// The static welcome screen's continue button.
    pub fn continue_pressed<T>(&mut self, timers: &mut T)
    where
        T: Timers<GateTimer, Handle = H>,
    {
        self.intro_finished(timers);
    }

    pub fn on_timer<T>(&mut self, timer: GateTimer, timers: &mut T)
    where
        T: Timers<GateTimer, Handle = H>,
    {
        self.timers.release(timer);
        match (timer, self.phase) {
            (GateTimer::CoverOpaque, GatePhase::Covering) => {
                self.phase = GatePhase::Covered;
                self.schedule(GateTimer::Reveal, self.timings.hold, timers);
            }
            (GateTimer::Reveal, GatePhase::Covered) => {
                self.reveal();
                self.schedule(GateTimer::CoverFade, self.timings.before_fade, timers);
            }
            (GateTimer::CoverFade, GatePhase::Revealed) => {
                self.phase = GatePhase::Uncovering;
                self.schedule(GateTimer::CoverRemoved, self.timings.fade_out, timers);
            }
            (GateTimer::CoverRemoved, GatePhase::Uncovering) => self.phase = GatePhase::Done,
            (timer, phase) => log::debug!("{timer:?} has nothing to do while {phase:?}"),
        }
    }

    /// Unmount. Anything not yet revealed stays unrecorded, and the gate
    /// ignores every later callback.
    pub fn teardown<T>(&mut self, timers: &mut T)
    where
        T: Timers<GateTimer, Handle = H>,
    {
        self.timers.cancel_all(timers);
        self.phase = GatePhase::Done;
        // dropping the sender cancels a parent still waiting
        self.done = None;
        (self.show_nav)(true);
    }

    fn reveal(&mut self) {
        self.phase = GatePhase::Revealed;
        if !self.flag_written {
            self.flag_written = true;
            if let Err(e) = self.store.mark_visited() {
                log::warn!("couldn't record visit, intro will play again: {e}");
            }
        }
        self.resolve(IntroResolution::Played);
        (self.show_nav)(true);
    }

    fn resolve(&mut self, resolution: IntroResolution) {
        if let Some(done) = self.done.take() {
            // receiver gone means the parent unmounted first
            let _ = done.send(resolution);
        }
    }

    fn schedule<T>(&mut self, timer: GateTimer, delay: Duration, timers: &mut T)
    where
        T: Timers<GateTimer, Handle = H>,
    {
        let handle = timers.timeout(delay, timer);
        if !self.timers.insert(timer, handle, timers) {
            log::warn!("couldn't schedule {timer:?}, running it now");
            self.on_timer(timer, timers);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::timers::manual::ManualTimers;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[derive(Default, Clone)]
    struct MemoryStore {
        flag: Arc<Mutex<Option<bool>>>,
        writes: Arc<Mutex<Vec<bool>>>,
        broken: bool,
    }

    impl VisitStore for MemoryStore {
        fn has_visited(&self) -> Result<bool, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.flag.lock().unwrap().unwrap_or(false))
        }

        fn mark_visited(&mut self) -> Result<(), StorageError> {
            if self.broken {
                return Err(StorageError::Write(VISIT_FLAG_KEY.to_string()));
            }
            *self.flag.lock().unwrap() = Some(true);
            self.writes.lock().unwrap().push(true);
            Ok(())
        }
    }

    type NavLog = Arc<Mutex<Vec<bool>>>;
    type TestGate = FirstVisitGate<MemoryStore, Box<dyn FnMut(bool)>, u64>;

    fn gate(store: &MemoryStore) -> (TestGate, NavLog, oneshot::Receiver<IntroResolution>) {
        let nav = NavLog::default();
        let sink = nav.clone();
        let (tx, rx) = oneshot::channel();
        let show_nav: Box<dyn FnMut(bool)> = Box::new(move |v| sink.lock().unwrap().push(v));
        (FirstVisitGate::new(store.clone(), show_nav, tx), nav, rx)
    }

    fn run(gate: &mut TestGate, timers: &mut ManualTimers<GateTimer>, until: Duration) {
        while let Some(t) = timers.pop_due(until) {
            gate.on_timer(t, timers);
        }
        timers.set_now(until);
    }

    #[test]
    fn returning_visitor_skips_immediately() {
        let store = MemoryStore::default();
        *store.flag.lock().unwrap() = Some(true);
        let (mut gate, nav, mut rx) = gate(&store);

        assert_eq!(gate.mount(IntroMode::Animated), GatePhase::Skipped);
        assert_eq!(rx.try_recv().unwrap(), Some(IntroResolution::Skipped));
        assert_eq!(*nav.lock().unwrap(), vec![true]);
        assert!(!gate.phase().shows_intro());
    }

    #[test]
    fn first_visit_plays_then_hands_off() {
        let store = MemoryStore::default();
        let (mut gate, nav, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();

        assert_eq!(
            gate.mount(IntroMode::Animated),
            GatePhase::Playing(IntroMode::Animated)
        );
        assert_eq!(*nav.lock().unwrap(), vec![false]);
        assert_eq!(rx.try_recv().unwrap(), None);

        gate.intro_finished(&mut timers);
        assert_eq!(gate.phase(), GatePhase::Covering);
        assert_eq!(gate.phase().cover_opacity(), Some(0.0));

        run(&mut gate, &mut timers, ms(200));
        assert_eq!(gate.phase(), GatePhase::Covered);
        run(&mut gate, &mut timers, ms(999));
        assert!(store.writes.lock().unwrap().is_empty());

        run(&mut gate, &mut timers, ms(1000));
        assert_eq!(gate.phase(), GatePhase::Revealed);
        assert!(gate.phase().shows_content());
        assert_eq!(gate.phase().cover_opacity(), Some(1.0));
        assert_eq!(*store.writes.lock().unwrap(), vec![true]);
        assert_eq!(rx.try_recv().unwrap(), Some(IntroResolution::Played));
        assert_eq!(*nav.lock().unwrap(), vec![false, true]);

        run(&mut gate, &mut timers, ms(1300));
        assert_eq!(gate.phase(), GatePhase::Uncovering);
        run(&mut gate, &mut timers, ms(2300));
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(gate.phase().cover_opacity(), None);
    }

    #[test]
    fn repeated_mounts_after_visit_never_replay() {
        let store = MemoryStore::default();
        let (mut first, _, _rx) = gate(&store);
        let mut timers = ManualTimers::new();
        first.mount(IntroMode::Animated);
        first.intro_finished(&mut timers);
        run(&mut first, &mut timers, ms(5000));

        for _ in 0..3 {
            let (mut again, _, _rx) = gate(&store);
            assert_eq!(again.mount(IntroMode::Animated), GatePhase::Skipped);
            again.teardown(&mut timers);
        }
        assert_eq!(*store.flag.lock().unwrap(), Some(true));
        assert_eq!(store.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn finish_signal_is_only_honoured_once() {
        let store = MemoryStore::default();
        let (mut gate, _, _rx) = gate(&store);
        let mut timers = ManualTimers::new();
        gate.mount(IntroMode::Animated);

        gate.intro_finished(&mut timers);
        run(&mut gate, &mut timers, ms(100));
        gate.intro_finished(&mut timers);
        run(&mut gate, &mut timers, ms(5000));
        gate.intro_finished(&mut timers);

        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(store.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn unmount_mid_handoff_leaves_flag_unset() {
        let store = MemoryStore::default();
        let (mut gate, nav, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();
        gate.mount(IntroMode::Animated);
        gate.intro_finished(&mut timers);
        run(&mut gate, &mut timers, ms(500));

        gate.teardown(&mut timers);
        assert_eq!(timers.pending(), 0);
        assert_eq!(*nav.lock().unwrap(), vec![false, true]);
        drop(gate);

        assert!(store.writes.lock().unwrap().is_empty());
        assert!(rx.try_recv().is_err());
        let (mut next, _, _rx) = self::gate(&store);
        assert!(next.mount(IntroMode::Animated).shows_intro());
    }

    #[test]
    fn late_finish_after_unmount_changes_nothing() {
        let store = MemoryStore::default();
        let (mut gate, nav, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();
        gate.mount(IntroMode::Animated);

        gate.teardown(&mut timers);
        assert_eq!(rx.try_recv(), Err(oneshot::Canceled));

        gate.intro_finished(&mut timers);
        gate.continue_pressed(&mut timers);
        run(&mut gate, &mut timers, ms(5000));

        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(timers.pending(), 0);
        assert!(store.writes.lock().unwrap().is_empty());
        assert_eq!(*nav.lock().unwrap(), vec![false, true]);
    }

    #[test]
    fn reduced_motion_gets_the_static_welcome() {
        assert_eq!(IntroMode::for_motion(true), IntroMode::StaticWelcome);
        assert_eq!(IntroMode::for_motion(false), IntroMode::Animated);
    }

    #[test]
    fn static_welcome_continue_takes_the_same_path() {
        let store = MemoryStore::default();
        let (mut gate, _, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();

        assert_eq!(
            gate.mount(IntroMode::StaticWelcome),
            GatePhase::Playing(IntroMode::StaticWelcome)
        );
        gate.continue_pressed(&mut timers);
        run(&mut gate, &mut timers, ms(5000));

        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(rx.try_recv().unwrap(), Some(IntroResolution::Played));
        assert_eq!(*store.flag.lock().unwrap(), Some(true));
    }

    #[test]
    fn broken_storage_always_plays_and_never_fails() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };
        let (mut gate, _, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();

        assert!(gate.mount(IntroMode::Animated).shows_intro());
        gate.intro_finished(&mut timers);
        run(&mut gate, &mut timers, ms(5000));

        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(rx.try_recv().unwrap(), Some(IntroResolution::Played));
        assert_eq!(*store.flag.lock().unwrap(), None);
    }

    #[test]
    fn unschedulable_handoff_still_completes() {
        let store = MemoryStore::default();
        let (mut gate, nav, mut rx) = gate(&store);
        let mut timers = ManualTimers::new();
        timers.refuse = true;
        gate.mount(IntroMode::Animated);

        gate.intro_finished(&mut timers);
        assert_eq!(gate.phase(), GatePhase::Done);
        assert_eq!(rx.try_recv().unwrap(), Some(IntroResolution::Played));
        assert_eq!(nav.lock().unwrap().last(), Some(&true));
    }

    #[test]
    fn mount_reads_only_once() {
        let store = MemoryStore::default();
        let (mut gate, nav, _rx) = gate(&store);
        gate.mount(IntroMode::Animated);
        *store.flag.lock().unwrap() = Some(true);

        assert!(gate.mount(IntroMode::Animated).shows_intro());
        assert_eq!(nav.lock().unwrap().len(), 1);
    }
}

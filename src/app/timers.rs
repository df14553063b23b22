use std::{rc::Rc, time::Duration};

use chrono::Utc;
use leptos::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

use crate::timers::Timers;

#[derive(Debug, Clone, Copy)]
pub enum TimerHandle {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

/// Schedules browser timers that hand their event to `dispatch` when they fire.
pub struct BrowserTimers<E> {
    dispatch: Rc<dyn Fn(E)>,
}

impl<E> BrowserTimers<E> {
    pub fn new(dispatch: impl Fn(E) + 'static) -> Self {
        Self {
            dispatch: Rc::new(dispatch),
        }
    }
}

impl<E: Copy + 'static> Timers<E> for BrowserTimers<E> {
    type Handle = TimerHandle;

    fn timeout(&mut self, delay: Duration, event: E) -> Option<TimerHandle> {
        let dispatch = self.dispatch.clone();
        set_timeout_with_handle(move || dispatch(event), delay)
            .map(TimerHandle::Timeout)
            .map_err(|e| log::warn!("couldn't set timeout: {e:?}"))
            .ok()
    }

    fn interval(&mut self, period: Duration, event: E) -> Option<TimerHandle> {
        let dispatch = self.dispatch.clone();
        set_interval_with_handle(move || dispatch(event), period)
            .map(TimerHandle::Interval)
            .map_err(|e| log::warn!("couldn't set interval: {e:?}"))
            .ok()
    }

    fn cancel(&mut self, handle: TimerHandle) {
        match handle {
            TimerHandle::Timeout(h) => h.clear(),
            TimerHandle::Interval(h) => h.clear(),
        }
    }
}

/// Wall-clock time as an offset from the unix epoch.
pub fn now() -> Duration {
    Duration::from_millis(Utc::now().timestamp_millis().max(0) as u64)
}

pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(Utc::now().timestamp_micros() as u64)
}

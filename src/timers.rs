use std::time::Duration;

/// Something that can schedule events to be delivered back later.
///
/// A `None` handle means the platform refused to schedule; callers degrade
/// instead of failing.
pub trait Timers<E> {
    type Handle;

    fn timeout(&mut self, delay: Duration, event: E) -> Option<Self::Handle>;

    fn interval(&mut self, period: Duration, event: E) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Live timer handles owned by a single component instance, at most one per key.
#[derive(Debug)]
pub struct TimerSet<K, H> {
    pending: Vec<(K, H)>,
}

impl<K, H> Default for TimerSet<K, H> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq + Copy, H> TimerSet<K, H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks `handle` under `key`, cancelling whatever was there before.
    pub fn insert<E, T>(&mut self, key: K, handle: Option<H>, timers: &mut T) -> bool
    where
        T: Timers<E, Handle = H>,
    {
        self.cancel(key, timers);
        match handle {
            Some(h) => {
                self.pending.push((key, h));
                true
            }
            None => false,
        }
    }

    /// Forgets a one-shot timer that already fired.
    pub fn release(&mut self, key: K) {
        self.pending.retain(|(k, _)| *k != key);
    }

    pub fn cancel<E, T>(&mut self, key: K, timers: &mut T)
    where
        T: Timers<E, Handle = H>,
    {
        if let Some(i) = self.pending.iter().position(|(k, _)| *k == key) {
            let (_, h) = self.pending.swap_remove(i);
            timers.cancel(h);
        }
    }

    pub fn cancel_all<E, T>(&mut self, timers: &mut T)
    where
        T: Timers<E, Handle = H>,
    {
        for (_, h) in self.pending.drain(..) {
            timers.cancel(h);
        }
    }

    pub fn contains(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Virtual-clock scheduler for driving state machines in tests.
#[cfg(test)]
pub(crate) mod manual {
    use std::time::Duration;

    use super::Timers;

    struct Pending<E> {
        id: u64,
        due: Duration,
        period: Option<Duration>,
        event: E,
    }

    pub(crate) struct ManualTimers<E> {
        now: Duration,
        next_id: u64,
        queue: Vec<Pending<E>>,
        pub(crate) refuse: bool,
    }

    impl<E: Clone> ManualTimers<E> {
        pub(crate) fn new() -> Self {
            Self {
                now: Duration::ZERO,
                next_id: 0,
                queue: Vec::new(),
                refuse: false,
            }
        }

        pub(crate) fn now(&self) -> Duration {
            self.now
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.len()
        }

        /// Pops the earliest event due at or before `until`, moving the clock to it.
        pub(crate) fn pop_due(&mut self, until: Duration) -> Option<E> {
            let i = self
                .queue
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= until)
                .min_by_key(|(_, p)| (p.due, p.id))
                .map(|(i, _)| i)?;
            let due = self.queue[i].due;
            self.now = due;
            let event = self.queue[i].event.clone();
            match self.queue[i].period {
                Some(period) => self.queue[i].due = due + period,
                None => {
                    self.queue.remove(i);
                }
            }
            Some(event)
        }

        /// Moves the clock forward without firing anything.
        pub(crate) fn set_now(&mut self, now: Duration) {
            assert!(now >= self.now, "virtual clock can't go backwards");
            self.now = now;
        }

        fn push(&mut self, delay: Duration, period: Option<Duration>, event: E) -> Option<u64> {
            if self.refuse {
                return None;
            }
            let id = self.next_id;
            self.next_id += 1;
            self.queue.push(Pending {
                id,
                due: self.now + delay,
                period,
                event,
            });
            Some(id)
        }
    }

    impl<E: Clone> Timers<E> for ManualTimers<E> {
        type Handle = u64;

        fn timeout(&mut self, delay: Duration, event: E) -> Option<u64> {
            self.push(delay, None, event)
        }

        fn interval(&mut self, period: Duration, event: E) -> Option<u64> {
            self.push(period, Some(period), event)
        }

        fn cancel(&mut self, handle: u64) {
            self.queue.retain(|p| p.id != handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTimers;
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn insert_replaces_and_cancels_previous_handle() {
        let mut timers = ManualTimers::<&str>::new();
        let mut set = TimerSet::new();
        let h = timers.timeout(ms(10), "first");
        set.insert(1, h, &mut timers);
        let h = timers.timeout(ms(20), "second");
        set.insert(1, h, &mut timers);

        assert_eq!(set.len(), 1);
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.pop_due(ms(100)), Some("second"));
    }

    #[test]
    fn cancel_all_clears_intervals_too() {
        let mut timers = ManualTimers::<u8>::new();
        let mut set = TimerSet::new();
        let h = timers.interval(ms(5), 0);
        set.insert('a', h, &mut timers);
        let h = timers.timeout(ms(50), 1);
        set.insert('b', h, &mut timers);

        set.cancel_all(&mut timers);
        assert!(set.is_empty());
        assert_eq!(timers.pop_due(ms(1000)), None);
    }

    #[test]
    fn refused_schedule_is_not_tracked() {
        let mut timers = ManualTimers::<u8>::new();
        timers.refuse = true;
        let mut set = TimerSet::new();
        let h = timers.timeout(ms(5), 0);
        assert!(!set.insert(0, h, &mut timers));
        assert!(!set.contains(0));
    }

    #[test]
    fn intervals_rearm_in_order() {
        let mut timers = ManualTimers::new();
        timers.interval(ms(100), "tick");
        timers.timeout(ms(150), "once");

        assert_eq!(timers.pop_due(ms(1000)), Some("tick"));
        assert_eq!(timers.now(), ms(100));
        assert_eq!(timers.pop_due(ms(1000)), Some("once"));
        assert_eq!(timers.pop_due(ms(1000)), Some("tick"));
        assert_eq!(timers.now(), ms(200));
    }
}

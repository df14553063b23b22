use std::sync::{Arc, Mutex, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSignal {
    Start,
    Complete,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Complete,
    Error,
}

impl From<Outcome> for RouteSignal {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Complete => RouteSignal::Complete,
            Outcome::Error => RouteSignal::Error,
        }
    }
}

/// The parts of a link click that decide whether the router takes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub button: i16,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub default_prevented: bool,
}

impl LinkClick {
    /// Plain primary clicks navigate in place. Anything else opens a new tab
    /// or window, or was already handled, and the location never changes.
    pub fn navigates_in_place(&self) -> bool {
        self.button == 0
            && !(self.ctrl || self.meta || self.shift || self.alt || self.default_prevented)
    }
}

type Listener = Arc<dyn Fn(RouteSignal) + Send + Sync>;

#[derive(Default)]
struct Inner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    in_flight: bool,
}

/// Navigation lifecycle signals for the whole app.
///
/// Every cycle is exactly one [`RouteSignal::Start`] followed by exactly one
/// of [`RouteSignal::Complete`] or [`RouteSignal::Error`]. Listeners are
/// called synchronously, in subscription order.
#[derive(Clone, Default)]
pub struct RouteEvents {
    inner: Arc<Mutex<Inner>>,
}

/// Unsubscribes its listener when dropped.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    events: Weak<Mutex<Inner>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.events.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl RouteEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn(RouteSignal) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.inner.lock().expect("should be able to lock route events");
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            events: Arc::downgrade(&self.inner),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.listeners.len())
            .unwrap_or_default()
    }

    pub fn in_flight(&self) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.in_flight)
            .unwrap_or_default()
    }

    /// A navigation was requested.
    pub fn start(&self) {
        self.set_in_flight(true);
        self.emit(RouteSignal::Start);
    }

    /// Starts a navigation for a link click, unless the router won't act on it.
    /// Returns whether a start was emitted.
    pub fn link_clicked(&self, click: LinkClick, from: &str, to: &str) -> bool {
        if from == to || !click.navigates_in_place() {
            return false;
        }
        self.start();
        true
    }

    /// The router settled on a location. Navigations nobody announced (history
    /// buttons, typed URLs) get their start emitted here.
    pub fn settle(&self, outcome: Outcome) {
        if !self.in_flight() {
            self.emit(RouteSignal::Start);
        }
        self.set_in_flight(false);
        self.emit(outcome.into());
    }

    fn set_in_flight(&self, value: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.in_flight = value;
        }
    }

    fn emit(&self, signal: RouteSignal) {
        // listeners may subscribe or navigate, so never call them under the lock
        let listeners = match self.inner.lock() {
            Ok(inner) => inner
                .listeners
                .iter()
                .map(|(_, l)| l.clone())
                .collect::<Vec<_>>(),
            Err(_) => return,
        };
        log::trace!("route signal {signal:?} to {} listeners", listeners.len());
        for listener in listeners {
            listener(signal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(events: &RouteEvents) -> (Arc<Mutex<Vec<RouteSignal>>>, Subscription) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let sub = events.subscribe(move |s| sink.lock().unwrap().push(s));
        (seen, sub)
    }

    #[test]
    fn announced_navigation_emits_start_then_complete() {
        let events = RouteEvents::new();
        let (seen, _sub) = recorder(&events);

        events.start();
        assert!(events.in_flight());
        events.settle(Outcome::Complete);

        assert!(!events.in_flight());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![RouteSignal::Start, RouteSignal::Complete]
        );
    }

    #[test]
    fn unannounced_navigation_still_gets_a_start() {
        let events = RouteEvents::new();
        let (seen, _sub) = recorder(&events);

        events.settle(Outcome::Error);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![RouteSignal::Start, RouteSignal::Error]
        );
    }

    #[test]
    fn only_plain_clicks_to_another_page_start() {
        let events = RouteEvents::new();
        let (seen, _sub) = recorder(&events);

        let ignored = [
            LinkClick { ctrl: true, ..Default::default() },
            LinkClick { meta: true, ..Default::default() },
            LinkClick { shift: true, ..Default::default() },
            LinkClick { alt: true, ..Default::default() },
            LinkClick { button: 1, ..Default::default() },
            LinkClick { default_prevented: true, ..Default::default() },
        ];
        for click in ignored {
            assert!(!events.link_clicked(click, "/", "/about"), "{click:?}");
        }
        assert!(!events.link_clicked(LinkClick::default(), "/about", "/about"));
        assert!(seen.lock().unwrap().is_empty());
        assert!(!events.in_flight());

        assert!(events.link_clicked(LinkClick::default(), "/", "/about"));
        assert_eq!(*seen.lock().unwrap(), vec![RouteSignal::Start]);
        assert!(events.in_flight());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let events = RouteEvents::new();
        let (seen, sub) = recorder(&events);
        assert_eq!(events.listener_count(), 1);

        sub.unsubscribe();
        assert_eq!(events.listener_count(), 0);
        events.start();
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn listener_may_subscribe_while_being_called() {
        let events = RouteEvents::new();
        let nested = Arc::new(Mutex::new(Vec::new()));
        let handle = events.clone();
        let keep = nested.clone();
        let _sub = events.subscribe(move |_| {
            keep.lock().unwrap().push(handle.subscribe(|_| {}));
        });

        events.start();
        assert_eq!(events.listener_count(), 2);
    }
}

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use rand::rngs::SmallRng;

use super::timers::{seeded_rng, BrowserTimers, TimerHandle};
use crate::typewriter::{TypePhase, TypeTimer, Typewriter, TypewriterTimings};

struct Typist {
    writer: Typewriter<TimerHandle>,
    rng: SmallRng,
}

type SharedTypist = StoredValue<Arc<Mutex<Typist>>>;

#[derive(Clone, Copy)]
struct Outputs {
    text: WriteSignal<String>,
    phase: WriteSignal<TypePhase>,
    on_complete: Option<Callback<()>>,
}

fn timers(typist: SharedTypist, out: Outputs) -> BrowserTimers<TypeTimer> {
    BrowserTimers::new(move |timer| on_timer(typist, out, timer))
}

fn on_timer(typist: SharedTypist, out: Outputs, timer: TypeTimer) {
    step(typist, out, |writer, timers, rng| writer.on_timer(timer, timers, rng));
}

fn step(
    typist: SharedTypist,
    out: Outputs,
    f: impl FnOnce(&mut Typewriter<TimerHandle>, &mut BrowserTimers<TypeTimer>, &mut SmallRng) -> bool,
) {
    let Some((text, phase, finished)) = typist.try_with_value(|t| {
        let mut t = t.lock().expect("should be able to lock typewriter");
        let Typist { writer, rng } = &mut *t;
        let finished = f(writer, &mut timers(typist, out), rng);
        (writer.visible(), writer.phase(), finished)
    }) else {
        return;
    };
    out.text.set(text);
    out.phase.set(phase);
    if finished {
        if let Some(cb) = out.on_complete {
            cb.run(());
        }
    }
}

/// Types `text` out one character at a time, then reports completion once.
#[component]
pub fn TypewriterText(
    #[prop(into)] text: String,
    #[prop(optional)] timings: Option<TypewriterTimings>,
    #[prop(optional)] on_complete: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let typist = StoredValue::new(Arc::new(Mutex::new(Typist {
        writer: Typewriter::new(&text, timings.unwrap_or_default()),
        rng: seeded_rng(),
    })));
    let (shown, set_shown) = signal(String::new());
    let (phase, set_phase) = signal(TypePhase::Idle);
    let out = Outputs {
        text: set_shown,
        phase: set_phase,
        on_complete,
    };

    // browser only, effects don't run during ssr
    Effect::new(move |_| {
        step(typist, out, |writer, timers, rng| writer.start(timers, rng));
    });
    on_cleanup(move || {
        typist.with_value(|t| {
            if let Ok(mut t) = t.lock() {
                t.writer.teardown(&mut timers(typist, out));
            }
        });
    });

    view! {
        <span class="inline-block whitespace-nowrap">
            <span class=format!("font-code {class}")>{shown}</span>
            <span
                class="inline-block w-2 ml-1 align-middle bg-secondary typewriter-cursor"
                class:typewriter-settled=move || phase.get() != TypePhase::Typing
            />
        </span>
    }
}

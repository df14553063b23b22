use std::sync::{Arc, Mutex};

use codee::string::FromToStringCodec;
use futures::channel::oneshot;
use leptos::{either::Either, prelude::*};
use leptos_use::{storage::use_local_storage, use_media_query};

use super::{
    timers::{seeded_rng, BrowserTimers, TimerHandle},
    typewriter::TypewriterText,
    vignette::SiteVignette,
};
use crate::{
    first_visit::{
        FirstVisitGate, GatePhase, GateTimer, IntroMode, IntroResolution, StorageError,
        VisitStore, VISIT_FLAG_KEY,
    },
    particles::scatter,
    site::WELCOME,
    typewriter::TypewriterTimings,
};

const INTRO_PARTICLES: usize = 30;

/// The visit flag in the browser's local storage.
struct LocalVisitStore {
    visited: Signal<bool>,
    set_visited: WriteSignal<bool>,
}

impl VisitStore for LocalVisitStore {
    fn has_visited(&self) -> Result<bool, StorageError> {
        self.visited
            .try_get_untracked()
            .ok_or_else(|| StorageError::Read(VISIT_FLAG_KEY.to_string()))
    }

    fn mark_visited(&mut self) -> Result<(), StorageError> {
        match self.set_visited.try_set(true) {
            None => Ok(()),
            Some(_) => Err(StorageError::Write(VISIT_FLAG_KEY.to_string())),
        }
    }
}

type Gate = FirstVisitGate<LocalVisitStore, Box<dyn FnMut(bool) + Send + Sync>, TimerHandle>;
type SharedGate = StoredValue<Arc<Mutex<Gate>>>;

fn timers(gate: SharedGate, set_phase: WriteSignal<GatePhase>) -> BrowserTimers<GateTimer> {
    BrowserTimers::new(move |timer| {
        with_gate(gate, set_phase, |g, timers| g.on_timer(timer, timers));
    })
}

fn with_gate(
    gate: SharedGate,
    set_phase: WriteSignal<GatePhase>,
    f: impl FnOnce(&mut Gate, &mut BrowserTimers<GateTimer>),
) {
    let phase = gate.try_with_value(|g| {
        let mut g = g.lock().expect("should be able to lock intro gate");
        f(&mut g, &mut timers(gate, set_phase));
        g.phase()
    });
    if let Some(phase) = phase {
        let _ = set_phase.try_set(phase);
    }
}

/// Plays the intro on a first visit, then fades through a white cover to the
/// page. `done` fires as soon as the page may mount.
#[component]
pub fn IntroGate(
    set_show_nav: WriteSignal<bool>,
    done: oneshot::Sender<IntroResolution>,
) -> impl IntoView {
    let (visited, set_visited, _) = use_local_storage::<bool, FromToStringCodec>(VISIT_FLAG_KEY);
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");

    let show_nav: Box<dyn FnMut(bool) + Send + Sync> = Box::new(move |show| {
        let _ = set_show_nav.try_set(show);
    });
    let gate = StoredValue::new(Arc::new(Mutex::new(FirstVisitGate::new(
        LocalVisitStore {
            visited,
            set_visited,
        },
        show_nav,
        done,
    ))));
    let (phase, set_phase) = signal(GatePhase::Pending);
    let (mode, set_mode) = signal(IntroMode::Animated);

    Effect::new(move |_| {
        let detected = IntroMode::for_motion(reduced_motion.get_untracked());
        set_mode.set(detected);
        with_gate(gate, set_phase, |g, _| {
            g.mount(detected);
        });
    });
    on_cleanup(move || {
        with_gate(gate, set_phase, |g, timers| g.teardown(timers));
    });

    let finish = Callback::new(move |_| {
        with_gate(gate, set_phase, |g, timers| g.intro_finished(timers));
    });
    let proceed = Callback::new(move |_| {
        with_gate(gate, set_phase, |g, timers| g.continue_pressed(timers));
    });

    view! {
        <Show when=move || phase.get().shows_intro()>
            {move || match mode.get() {
                IntroMode::Animated => Either::Left(view! { <IntroScene on_complete=finish /> }),
                IntroMode::StaticWelcome => {
                    Either::Right(view! { <StaticWelcome on_continue=proceed /> })
                }
            }}
        </Show>
        <div
            class="fixed inset-0 z-[100] bg-white pointer-events-none transition-opacity duration-[1200ms] ease-in-out"
            style=move || match phase.get().cover_opacity() {
                Some(opacity) => format!("opacity: {opacity}"),
                None => "display: none; opacity: 0".to_string(),
            }
        />
    }
}

#[component]
fn IntroScene(on_complete: Callback<()>) -> impl IntoView {
    let particles = scatter(INTRO_PARTICLES, &mut seeded_rng());

    view! {
        <div class="fixed inset-0 z-[90] bg-primary flex items-center justify-center overflow-hidden">
            <SiteVignette intro=true />
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                {particles
                    .into_iter()
                    .map(|p| {
                        view! {
                            <div
                                class="absolute w-[3px] h-[3px] rounded-full shadow-glow particle"
                                style=p.style(0.0)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <h1 class="relative text-3xl md:text-5xl font-heading text-background px-6 text-center animate-fade-in">
                <TypewriterText
                    text=WELCOME
                    timings=TypewriterTimings::intro()
                    on_complete
                />
            </h1>
        </div>
    }
}

#[component]
fn StaticWelcome(on_continue: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[90] bg-primary flex flex-col items-center justify-center px-6 text-center">
            <h1 class="text-3xl md:text-5xl font-heading text-background mb-10">{WELCOME}</h1>
            <button
                class="px-6 py-3 rounded-lg bg-secondary text-primary font-medium hover:bg-background transition-colors"
                on:click=move |_| on_continue.run(())
            >
                "Continue to Site"
            </button>
        </div>
    }
}

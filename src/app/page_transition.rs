use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use rand::rngs::SmallRng;

use super::timers::{now, seeded_rng, BrowserTimers, TimerHandle};
use crate::{
    overlay::{Fired, OverlayTimings, TransitionOverlay, TransitionState},
    particles::{scatter, Particle},
    route_events::{RouteEvents, RouteSignal},
};

const PARTICLE_COUNT: usize = 15;

struct Driver {
    overlay: TransitionOverlay<TimerHandle>,
    rng: SmallRng,
}

type SharedDriver = StoredValue<Arc<Mutex<Driver>>>;

#[derive(Clone, Copy)]
struct Outputs {
    state: WriteSignal<TransitionState>,
    particles: WriteSignal<Vec<Particle>>,
}

fn timers(driver: SharedDriver, out: Outputs) -> BrowserTimers<Fired> {
    BrowserTimers::new(move |fired| on_timer(driver, out, fired))
}

fn on_timer(driver: SharedDriver, out: Outputs, fired: Fired) {
    let state = driver.try_with_value(|d| {
        let mut d = d.lock().expect("should be able to lock transition driver");
        let Driver { overlay, rng } = &mut *d;
        overlay.on_timer(fired, &mut timers(driver, out), rng);
        overlay.state().clone()
    });
    if let Some(state) = state {
        out.state.set(state);
    }
}

fn on_route_signal(driver: SharedDriver, out: Outputs, signal: RouteSignal) {
    let (state, particles) = driver.with_value(|d| {
        let mut d = d.lock().expect("should be able to lock transition driver");
        d.overlay.handle(signal, now(), &mut timers(driver, out));
        let particles = if signal == RouteSignal::Start {
            Some(scatter(PARTICLE_COUNT, &mut d.rng))
        } else {
            None
        };
        (d.overlay.state().clone(), particles)
    });
    if let Some(particles) = particles {
        out.particles.set(particles);
    }
    out.state.set(state);
}

#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let events = expect_context::<RouteEvents>();
    let driver = StoredValue::new(Arc::new(Mutex::new(Driver {
        overlay: TransitionOverlay::new(OverlayTimings::default()),
        rng: seeded_rng(),
    })));
    let (state, set_state) = signal(TransitionState::default());
    let (particles, set_particles) = signal(Vec::<Particle>::new());
    let out = Outputs {
        state: set_state,
        particles: set_particles,
    };

    let subscription = events.subscribe(move |signal| on_route_signal(driver, out, signal));
    on_cleanup(move || {
        subscription.unsubscribe();
        driver.with_value(|d| {
            if let Ok(mut d) = d.lock() {
                d.overlay.teardown(&mut timers(driver, out));
            }
        });
    });

    let progress = move || state.with(|s| s.progress);

    view! {
        {children()}
        <Show when=move || state.with(|s| s.active())>
            <div class="fixed inset-0 z-50 bg-background flex flex-col items-center justify-center animate-fade-in">
                <div class="absolute inset-0 pointer-events-none vignette" />
                <div class="absolute inset-0 overflow-hidden pointer-events-none">
                    {move || {
                        let progress = progress();
                        particles
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <div
                                        class="absolute w-[3px] h-[3px] rounded-full shadow-glow particle"
                                        style=p.style(progress)
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || {
                    state
                        .with(|s| s.message)
                        .map(|message| {
                            view! {
                                <div class="text-accent text-xl text-center px-4 max-w-xl mb-10 font-medium animate-rise">
                                    <span>{message}</span>
                                </div>
                            }
                        })
                }}
                <div class="w-64 h-1.5 bg-gray-200/30 rounded-full overflow-hidden my-6">
                    <div
                        class="h-full bg-gradient-to-r from-gray-500 via-accent to-primary shadow-glow transition-[width] duration-300 ease-linear"
                        style=move || format!("width: {:.1}%", progress())
                    />
                </div>
                <div class="mt-4 text-accent font-medium">
                    {move || if state.with(|s| s.is_ready()) { "Ready!" } else { "Loading..." }}
                </div>
            </div>
        </Show>
    }
}

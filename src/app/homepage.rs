use leptos::prelude::*;
use leptos_meta::Title;

use super::{timers::seeded_rng, typewriter::TypewriterText};
use crate::{particles::scatter, site::OWNER};

const MOTES: usize = 30;

const ROLES: &str = "Developer | Innovator | Researcher";

struct Social {
    label: &'static str,
    href: &'static str,
}

const SOCIALS: [Social; 3] = [
    Social {
        label: "GitHub",
        href: "https://github.com/codealpha7",
    },
    Social {
        label: "LinkedIn",
        href: "https://linkedin.com/in/salman-azeez-syed",
    },
    Social {
        label: "Email",
        href: "mailto:azeezsalman1@gmail.com",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="relative min-h-screen overflow-hidden flex flex-col justify-center items-center px-4 sm:px-6 animate-fade-in">
            <FloatingMotes />
            <div class="absolute inset-0 z-0 pointer-events-none hero-glow" />
            <div class="w-full max-w-4xl lg:max-w-6xl mx-auto py-8 relative space-y-12 sm:space-y-20">
                <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold font-heading mb-2 text-center px-4 animate-drop-in">
                    <span class="bg-clip-text text-transparent bg-gradient-to-r from-secondary via-accent to-primary">
                        {OWNER}
                    </span>
                </h1>
                <div class="h-1 w-32 sm:w-64 bg-secondary mx-auto animate-rise" />
                <h2 class="text-xl sm:text-2xl md:text-3xl text-accent font-light text-center px-4">
                    <TypewriterText text=ROLES />
                </h2>
                <p class="text-base sm:text-lg max-w-2xl mx-auto text-center leading-relaxed px-4 animate-rise">
                    "Master's student at Georgia Institute of Technology with a passion for innovative software solutions and cloud technologies."
                </p>
                <div class="flex flex-col sm:flex-row justify-center items-center gap-4 sm:gap-8 px-4 animate-rise">
                    <a
                        href="/Salman_Azeez_Syed_Resume.pdf"
                        class="px-4 sm:px-8 py-2 sm:py-3 rounded-full font-medium shadow-lg bg-secondary text-primary w-full sm:w-auto text-center hover:shadow-glow transition-shadow"
                    >
                        "View Resume"
                    </a>
                    <a
                        href="#contact"
                        class="px-4 sm:px-8 py-2 sm:py-3 rounded-full font-medium shadow-lg bg-primary text-secondary w-full sm:w-auto text-center hover:shadow-glow transition-shadow"
                    >
                        "Contact Me"
                    </a>
                </div>
                <div id="contact" class="flex justify-center space-x-8 sm:space-x-12 animate-rise">
                    {SOCIALS
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-lg sm:text-2xl text-accent hover:text-secondary transition-colors duration-300"
                                >
                                    {s.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn FloatingMotes() -> impl IntoView {
    let motes = scatter(MOTES, &mut seeded_rng());

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none">
            {motes
                .into_iter()
                .map(|m| {
                    view! {
                        <div
                            class="absolute w-1 h-1 rounded-full bg-secondary/20 particle"
                            style=m.ambient_style()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

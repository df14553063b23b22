use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::profile::{
    Certification, Degree, Hobby, HobbyFocus, CERTIFICATIONS, EDUCATION, HOBBIES, MILESTONES,
    SKILLS,
};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <Journey />
        <Education />
        <Skills />
        <Certifications />
        <Hobbies />
    }
}

#[component]
fn Journey() -> impl IntoView {
    view! {
        <section class="container max-w-4xl mx-auto px-4 py-12 animate-fade-in">
            <h1 class="text-4xl font-heading text-primary text-center mb-12">"My Journey So Far"</h1>
            <ol class="relative border-l-4 border-secondary ml-4 space-y-12">
                {MILESTONES
                    .iter()
                    .map(|m| {
                        view! {
                            <li class="ml-8 animate-rise">
                                <span class="absolute -left-[14px] w-6 h-6 rounded-full bg-secondary shadow-glow" />
                                <h2 class="text-5xl font-bold font-heading text-primary">{m.year}</h2>
                                <h3 class="text-2xl font-semibold mt-2">{m.title}</h3>
                                <p class="text-lg text-accent mb-4">{m.description}</p>
                                <ul class="list-disc list-inside space-y-2">
                                    {m.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-primary to-secondary text-white">
            <h2 class="text-4xl font-bold text-center mb-10">"Education"</h2>
            <div class="max-w-4xl mx-auto px-4">
                {EDUCATION.iter().map(|d| view! { <DegreeCard degree=d /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn DegreeCard(degree: &'static Degree) -> impl IntoView {
    let courses = (!degree.courses.is_empty())
        .then(|| {
            view! {
                <div>
                    <h4 class="font-semibold text-center mb-2">"Key Courses:"</h4>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        {degree
                            .courses
                            .iter()
                            .map(|column| {
                                view! {
                                    <ul class="list-disc list-inside">
                                        {column.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                                    </ul>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        });

    view! {
        <div class="bg-white text-primary p-6 rounded-lg shadow-lg mb-8 animate-rise">
            <div class="flex flex-col sm:flex-row justify-between mb-4 gap-2">
                <div>
                    <h3 class="text-2xl font-semibold">{degree.university}</h3>
                    <p class="text-xl">{degree.degree}</p>
                    <p class="italic">{degree.specialization}</p>
                </div>
                <div class="sm:text-right">
                    <p>{degree.location}</p>
                    <p>{degree.graduation}</p>
                </div>
            </div>
            {courses}
        </div>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section class="py-16 bg-gradient-to-r from-accent to-primary">
            <h2 class="text-4xl font-bold text-center text-white mb-10">"Skills"</h2>
            <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-6 px-4">
                {SKILLS
                    .iter()
                    .map(|cat| {
                        view! {
                            <div class="bg-white p-4 rounded-lg shadow-md hover:scale-105 transition-transform">
                                <h3 class="text-xl font-semibold mb-2">{cat.category}</h3>
                                <div class="flex flex-wrap gap-2">
                                    {cat
                                        .skills
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <span class="bg-secondary text-white px-2 py-1 rounded-full text-sm">
                                                    {*s}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Certifications() -> impl IntoView {
    view! {
        <section class="py-32 bg-background relative overflow-hidden">
            <h2 class="text-5xl font-bold font-heading text-center text-primary mb-20">
                "Certifications & Courses"
            </h2>
            <div class="max-w-6xl mx-auto grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 px-4">
                {CERTIFICATIONS.iter().map(|cert| view! { <CertCard cert /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CertCard(cert: &'static Certification) -> impl IntoView {
    let action = match cert.verify_url() {
        Some(url) => Either::Left(
            view! {
                <a
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-4 py-2 rounded-lg bg-secondary/60 hover:bg-secondary/80 border border-secondary/80 text-white text-sm font-medium transition-all duration-300"
                >
                    "Verify"
                </a>
            },
        ),
        None => Either::Right(
            view! {
                <span class="px-4 py-2 rounded-lg bg-green-300/20 border border-green-400/40 text-green-500 text-sm font-medium cursor-not-allowed">
                    "In Progress"
                </span>
            },
        ),
    };

    view! {
        <div class="p-8 rounded-xl bg-background shadow-[0_10px_30px_rgba(0,0,0,0.5)] border border-secondary/30 flex flex-col justify-between min-h-[240px] hover:scale-[1.03] transition-transform animate-rise">
            <div>
                <h3 class="text-2xl font-bold mb-3 text-secondary">{cert.title}</h3>
                <div class="h-px w-full bg-gradient-to-r from-secondary/50 to-transparent mb-4" />
            </div>
            <div class="space-y-4">
                <p class="text-text font-semibold text-lg">{cert.issuer}</p>
                <div class="flex items-center justify-between">
                    <p class="text-accent">{format!("Issued: {}", cert.issued_label())}</p>
                    {action}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Hobbies() -> impl IntoView {
    let (focus, set_focus) = signal(HobbyFocus::default());
    let close = Callback::new(move |_| set_focus.update(|f| *f = f.close()));

    view! {
        <section class="py-16 bg-gradient-to-r from-primary to-accent">
            <h2 class="text-4xl font-bold text-center text-white mb-10">"Hobbies & Interests"</h2>
            <div class="max-w-6xl mx-auto grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4 px-4">
                {HOBBIES
                    .iter()
                    .enumerate()
                    .map(|(i, hobby)| {
                        view! {
                            <button
                                class="bg-white p-4 rounded-lg shadow-lg text-center hover:scale-105 active:scale-95 transition-transform"
                                on:click=move |_| set_focus.update(|f| *f = f.open(i))
                            >
                                <div class="text-3xl mb-2">{hobby.icon}</div>
                                <h3 class="text-lg font-semibold mb-1">{hobby.name}</h3>
                                <p class="text-sm text-gray-600">{hobby.description}</p>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || focus.get().hobby().map(|hobby| view! { <ExpandedHobby hobby on_close=close /> })}
        </section>
    }
}

#[component]
fn ExpandedHobby(hobby: &'static Hobby, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 flex items-center justify-center z-50 animate-fade-in"
            on:click=move |_| on_close.run(())
        >
            <div class="absolute inset-0 bg-black/50 backdrop-blur-md" />
            <div
                class="bg-white p-8 rounded-lg shadow-2xl max-w-2xl w-full m-4 relative z-10"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="text-5xl mb-4">{hobby.icon}</div>
                <h2 class="text-3xl font-bold mb-2">{hobby.name}</h2>
                <p class="text-xl mb-4">{hobby.description}</p>
                <p class="text-gray-700 mb-6">{hobby.details}</p>
                <button
                    class="bg-primary text-white px-4 py-2 rounded-full hover:bg-primary/80 transition-colors"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}

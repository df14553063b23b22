use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::{
    route_events::{LinkClick, RouteEvents},
    site::{Page, BUILD_DATE, OWNER},
};

#[component]
fn NavLink(page: Page, #[prop(optional)] on_navigate: Option<Callback<()>>) -> impl IntoView {
    let events = expect_context::<RouteEvents>();
    let location = use_location();

    view! {
        <li>
            <A
                href=page.path()
                attr:class="text-text hover:text-secondary transition-colors duration-300"
                on:click=move |ev| {
                    let click = LinkClick {
                        button: ev.button(),
                        ctrl: ev.ctrl_key(),
                        meta: ev.meta_key(),
                        shift: ev.shift_key(),
                        alt: ev.alt_key(),
                        default_prevented: ev.default_prevented(),
                    };
                    events.link_clicked(click, &location.pathname.get_untracked(), page.path());
                    if let Some(cb) = on_navigate {
                        cb.run(());
                    }
                }
            >
                {page.label()}
            </A>
        </li>
    }
}

#[component]
pub fn SiteHeader(show: ReadSignal<bool>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_| set_menu_open(false));

    view! {
        <Show when=move || show.get()>
            <header class="bg-background/20 text-text p-4 md:p-6 sticky top-0 z-[60] backdrop-blur-lg animate-drop-in">
                <div class="max-w-7xl mx-auto flex justify-between items-center">
                    <A href="/" attr:class="font-heading text-2xl md:text-3xl font-bold">
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-secondary via-accent to-primary">
                            {OWNER}
                        </span>
                    </A>

                    <nav class="hidden md:block">
                        <ul class="flex space-x-8">
                            {Page::ALL.into_iter().map(|page| view! { <NavLink page /> }).collect_view()}
                        </ul>
                    </nav>

                    <button
                        class="md:hidden p-2 text-text hover:text-secondary"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            {move || {
                                if menu_open.get() {
                                    Either::Left(
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M6 18L18 6M6 6l12 12"
                                            />
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M4 6h16M4 12h16M4 18h16"
                                            />
                                        },
                                    )
                                }
                            }}
                        </svg>
                    </button>
                </div>

                <Show when=move || menu_open.get()>
                    <nav class="md:hidden">
                        <ul class="flex flex-col space-y-4 mt-4 p-4 bg-background/90 backdrop-blur-lg rounded-lg">
                            {Page::ALL
                                .into_iter()
                                .map(|page| view! { <NavLink page on_navigate=close_menu /> })
                                .collect_view()}
                        </ul>
                    </nav>
                </Show>
            </header>
        </Show>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    use chrono::Datelike;

    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-background text-text p-4 md:p-6 mt-12">
            <div class="max-w-7xl mx-auto text-center text-sm md:text-base">
                <p>{format!("© {year} {OWNER}. All rights reserved.")}</p>
                <p class="text-xs text-accent mt-1">{format!("Built {BUILD_DATE}")}</p>
            </div>
        </footer>
    }
}

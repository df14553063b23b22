mod about;
mod header;
mod homepage;
mod intro;
mod page_transition;
mod pages;
mod timers;
mod typewriter;
mod vignette;

use futures::channel::oneshot;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::{
    first_visit::IntroResolution,
    route_events::{Outcome, RouteEvents},
    site::{Page, OWNER},
};
use about::AboutPage;
use header::{SiteFooter, SiteHeader};
use homepage::HomePage;
use intro::IntroGate;
use page_transition::PageTransition;
use pages::{BlogsPage, ExperiencesPage, GalleryPage, NotFound};
use vignette::SiteVignette;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body bg-background text-text min-h-screen flex flex-col">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(RouteEvents::new());

    let (show_nav, set_show_nav) = signal(false);
    let (intro_done, set_intro_done) = signal(false);
    let (done, resolved) = oneshot::channel::<IntroResolution>();
    let resolved = StoredValue::new(Some(resolved));

    // the gate only resolves in the browser
    Effect::new(move |_| {
        let Some(resolved) = resolved.try_update_value(Option::take).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match resolved.await {
                Ok(resolution) => {
                    log::debug!("intro resolved: {resolution:?}");
                    set_intro_done(true);
                }
                Err(_) => log::debug!("intro gate went away before resolving"),
            }
        });
    });

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <RouteWatcher />
            <PageTransition>
                <SiteVignette />
                <SiteHeader show=show_nav />
                <main class="flex flex-col flex-grow w-full">
                    <IntroGate set_show_nav done />
                    <Show when=move || intro_done.get()>
                        <Routes fallback=NotFound>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about") view=AboutPage />
                            <Route path=path!("/experiences") view=ExperiencesPage />
                            <Route path=path!("/blogs") view=BlogsPage />
                            <Route path=path!("/gallery") view=GalleryPage />
                        </Routes>
                    </Show>
                </main>
                <SiteFooter />
            </PageTransition>
        </Router>
    }
}

/// Settles the in-flight navigation whenever the router lands somewhere.
///
/// Page content waits for the intro gate, which only resolves in the browser,
/// so the server response status for unknown paths is decided here.
#[component]
fn RouteWatcher() -> impl IntoView {
    let events = expect_context::<RouteEvents>();
    let location = use_location();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;

        let status = crate::site::response_status(&location.pathname.get_untracked());
        if let (Some(resp), Ok(status)) = (
            use_context::<ResponseOptions>(),
            http::StatusCode::from_u16(status),
        ) {
            resp.set_status(status);
        }
    }

    Effect::watch(
        move || location.pathname.get(),
        move |path, _, _| {
            let outcome = match Page::from_path(path) {
                Some(_) => Outcome::Complete,
                None => {
                    log::debug!("no page at {path}");
                    Outcome::Error
                }
            };
            events.settle(outcome);
        },
        false,
    );
}

use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

use crate::vignette::{pointer_focus, Vignette};

/// Pulsing vignette fixed over the viewport, its light spot following the pointer.
#[component]
pub fn SiteVignette(#[prop(optional)] intro: bool) -> impl IntoView {
    let vignette = if intro {
        Vignette::intro()
    } else {
        Vignette::page()
    };
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();

    let style = move || vignette.style(pointer_focus(x.get(), y.get(), width.get(), height.get()));

    view! { <div class="fixed inset-0 pointer-events-none z-10 site-vignette" style=style /> }
}

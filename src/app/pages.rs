use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
fn UnderConstruction(title: &'static str) -> impl IntoView {
    view! {
        <Title text=title />
        <div class="container mx-auto px-4 py-8 animate-fade-in">
            <h1 class="text-4xl font-bold text-primary mb-6">{title}</h1>
            <p>"This page is under construction. Check back soon!"</p>
        </div>
    }
}

#[component]
pub fn ExperiencesPage() -> impl IntoView {
    view! { <UnderConstruction title="Experiences" /> }
}

#[component]
pub fn BlogsPage() -> impl IntoView {
    view! { <UnderConstruction title="Blogs" /> }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! { <UnderConstruction title="Gallery" /> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="container mx-auto px-4 py-24 text-center animate-fade-in">
            <h1 class="text-6xl font-bold font-heading text-secondary mb-6">"404"</h1>
            <p class="text-xl text-accent mb-8">"This page wandered off somewhere."</p>
            <A href="/" attr:class="px-6 py-3 rounded-full bg-primary text-secondary font-medium">
                "Back Home"
            </A>
        </div>
    }
}

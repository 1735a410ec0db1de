use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section container text-center">
            <span class="badge badge-green">"404"</span>
            <h1 class="page-title">"Page not found"</h1>
            <p class="lead">"The page you are looking for does not exist or has moved."</p>
            <A href=Page::Home.path() attr:class="btn btn-primary">"Back to Home"</A>
        </section>
    }
}

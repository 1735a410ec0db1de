//! Landing page

use kakondo_core::content::{self, pages::{FOCUS_SUMMARIES, HOME_STATS}};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::StatCard;
use crate::routes::Page;

/// News items in the teaser row
const LATEST_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let latest = content::latest_news(LATEST_COUNT);

    view! {
        <section class="hero">
            <div class="container text-center">
                <span class="badge badge-green">"Est. 2020 • Registered NGO 2025"</span>
                <h1 class="hero-title">
                    "Protecting Nature,"
                    <span class="accent">" Empowering Communities"</span>
                </h1>
                <p class="lead">
                    "A thriving Kakondo landscape where people and wildlife coexist in harmony, sustaining resilient livelihoods, "
                    "preserving cultural heritage, and protecting biodiversity for future generations."
                </p>
                <div class="button-row">
                    <A href=Page::FocusArea.path() attr:class="btn btn-primary btn-lg">"Learn About Our Mission"</A>
                    <A href=Page::GetInvolved.path() attr:class="btn btn-outline btn-lg">"Support Our Cause"</A>
                </div>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container grid grid-4">
                {HOME_STATS.iter().map(|stat| view! {
                    <StatCard value=stat.value.to_string() label=stat.label/>
                }).collect_view()}
            </div>
        </section>

        <section class="section container">
            <div class="section-heading">
                <h2>"Our Strategic Focus Areas"</h2>
                <p class="lead">"We work across four interconnected areas to achieve lasting impact for both people and nature"</p>
            </div>
            <div class="grid grid-4">
                {FOCUS_SUMMARIES.iter().map(|area| view! {
                    <div class="card">
                        <h3 class="card-title">{area.title}</h3>
                        <p class="card-text">{area.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container">
                <div class="section-heading row-between">
                    <h2>"Latest News & Updates"</h2>
                    <A href=Page::News.path() attr:class="btn btn-outline">"View All News"</A>
                </div>
                <div class="grid grid-3">
                    {latest.into_iter().map(|item| view! {
                        <article class="card">
                            <img class="card-image" src=item.image.clone() alt=item.title.clone()/>
                            <div class="card-body">
                                <span class="badge badge-green">{item.category.clone()}</span>
                                <h3 class="card-title">{item.title.clone()}</h3>
                                <p class="card-text">{item.description.clone()}</p>
                                <span class="muted">{item.formatted_date()}</span>
                            </div>
                        </article>
                    }).collect_view()}
                </div>
            </div>
        </section>

        <section class="section cta">
            <div class="container text-center">
                <h2>"Join Us in Protecting Kakondo"</h2>
                <p class="lead">
                    "Whether you're interested in volunteering, partnering with us, or supporting our mission, "
                    "there are many ways to get involved in our conservation efforts."
                </p>
                <div class="button-row">
                    <A href=Page::GetInvolved.path() attr:class="btn btn-light btn-lg">"Become a Volunteer"</A>
                    <A href=Page::Contact.path() attr:class="btn btn-outline-light btn-lg">"Partner With Us"</A>
                </div>
            </div>
        </section>
    }
}

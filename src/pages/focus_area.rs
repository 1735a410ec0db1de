//! Strategic focus areas

use kakondo_core::content::pages::{ACHIEVEMENTS, FOCUS_AREAS, IMPLEMENTATION_APPROACH};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::StatCard;
use crate::routes::Page;

#[component]
pub fn FocusAreaPage() -> impl IntoView {
    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <span class="badge badge-green">"Strategic Focus Areas"</span>
                <h1 class="page-title">
                    "Our Integrated Approach to"
                    <span class="accent">" Conservation & Development"</span>
                </h1>
                <p class="lead">
                    "Four interconnected areas guide our work in the Kakondo landscape, "
                    "blending traditional knowledge with modern practice."
                </p>
            </div>

            <section class="grid grid-4">
                {ACHIEVEMENTS.iter().map(|a| view! {
                    <StatCard value=a.value.to_string() label=a.label detail=a.description.to_string()/>
                }).collect_view()}
            </section>

            <section class="focus-list">
                {FOCUS_AREAS.iter().enumerate().map(|(index, area)| {
                    let class = if index % 2 == 1 { "focus-area reversed" } else { "focus-area" };
                    view! {
                        <article class=class id=area.id>
                            <img class="focus-image" src=area.image_url() alt=area.subtitle/>
                            <div class="focus-body">
                                <span class="badge badge-green">{area.subtitle}</span>
                                <h2 class="card-title">{area.title}</h2>
                                <p>{area.description}</p>
                                <div class="grid grid-2">
                                    <div>
                                        <h4>"Key Goals"</h4>
                                        <ul class="check-list">
                                            {area.goals.iter().map(|goal| view! { <li>{*goal}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                    <div>
                                        <h4>"Main Activities"</h4>
                                        <ul class="check-list">
                                            {area.activities.iter()
                                                .map(|activity| view! { <li>{*activity}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            </div>
                        </article>
                    }
                }).collect_view()}
            </section>

            <section class="panel panel-green text-center">
                <h3>"Partner with Us"</h3>
                <p>
                    "Join hands with us to expand the reach and impact of these projects. "
                    "Together, we can create a sustainable future that benefits both people and the planet."
                </p>
                <div class="button-row">
                    <A href=Page::GetInvolved.path() attr:class="btn btn-light">"Become a Partner"</A>
                    <A href=Page::Projects.path() attr:class="btn btn-outline-light">"Visit Our Projects"</A>
                </div>
            </section>

            <section class="section">
                <h2 class="text-center">"Our Implementation Approach"</h2>
                <div class="grid grid-3">
                    {IMPLEMENTATION_APPROACH.iter().map(|item| view! {
                        <div class="card">
                            <h3 class="card-title">{item.title}</h3>
                            <p class="card-text">{item.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

//! Project portfolio with category filter

use kakondo_core::content::{self, FEATURED_PROJECTS, PROJECT_CATEGORIES};
use kakondo_core::domain::{Project, ProjectStatus};
use kakondo_core::filter::ALL_CHOICE;
use kakondo_core::{thousands, Catalog, FilterCriteria, Selection};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{ChoiceButtons, StatCard};
use crate::routes::Page;

fn category_label(category: &'static str) -> &'static str {
    if category == ALL_CHOICE {
        "All Categories"
    } else {
        category
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::new(content::projects()));
    // Statistic cards cover the whole portfolio, whatever the filter
    let stats = catalog.with_value(|c| c.aggregate());

    let (category, set_category) = signal(ALL_CHOICE.to_string());
    let (selected, set_selected) = signal(None::<Project>);
    let (featured_tab, set_featured_tab) = signal(FEATURED_PROJECTS[0].key.to_string());

    let visible = move || {
        let criteria = FilterCriteria::new().with_category(Selection::from_choice(&category.get()));
        catalog.with_value(|c| c.filter(&criteria).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <h1 class="page-title">"Our Projects"</h1>
                <p class="lead">
                    "Community-led initiatives across conservation, agriculture, tourism and governance "
                    "in the Kakondo landscape."
                </p>
            </div>

            <section class="grid grid-4">
                <StatCard value=stats.total.to_string() label="Total Projects"/>
                <StatCard value=stats.count(ProjectStatus::Ongoing).to_string() label="Ongoing"/>
                <StatCard value=stats.count(ProjectStatus::Completed).to_string() label="Completed"/>
                <StatCard value=thousands(stats.sum) label="Beneficiaries"/>
            </section>

            <section class="filter-bar">
                <h3>"Filter by Category:"</h3>
                <ChoiceButtons
                    choices=PROJECT_CATEGORIES.iter().map(|c| (*c, category_label(*c))).collect()
                    current=category
                    on_change=move |value| set_category.set(value)
                />
            </section>

            <section class="grid grid-3">
                <For
                    each=visible
                    key=|project: &Project| project.id.clone()
                    children=move |project: Project| {
                        let detail = project.clone();
                        view! {
                            <article class="card">
                                <img class="card-image" src=project.image.clone() alt=project.title.clone()/>
                                <div class="card-body">
                                    <div class="badge-row">
                                        <span class=project.status.badge_class()>{project.status.as_str()}</span>
                                        <span class="badge badge-outline">{project.category.clone()}</span>
                                    </div>
                                    <h3 class="card-title">{project.title.clone()}</h3>
                                    <p class="card-text">{project.description.clone()}</p>
                                    <ul class="meta-list">
                                        <li>{project.year.clone()}</li>
                                        <li>{project.location.clone()}</li>
                                        <li>{format!("{} beneficiaries", thousands(project.beneficiaries))}</li>
                                        {project.budget.clone().map(|budget| view! { <li>"Budget: " {budget}</li> })}
                                    </ul>
                                    <h4>"Key Outcomes:"</h4>
                                    <ul class="check-list">
                                        {project.headline_outcomes().iter()
                                            .map(|o| view! { <li>{o.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button
                                        class="btn btn-outline btn-block"
                                        on:click=move |_| set_selected.set(Some(detail.clone()))
                                    >
                                        "View Details"
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </section>
            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No projects in this category yet."</p>
            </Show>

            <section class="section">
                <h2 class="text-center">"Featured Projects"</h2>
                <ChoiceButtons
                    choices=FEATURED_PROJECTS.iter().map(|f| (f.key, f.tab)).collect()
                    current=featured_tab
                    on_change=move |value| set_featured_tab.set(value)
                    class="tab-row"
                />
                {move || {
                    let tab = featured_tab.get();
                    FEATURED_PROJECTS.iter().find(|f| f.key == tab).map(|featured| view! {
                        <div class="card featured">
                            <img class="featured-image" src=featured.image_url() alt=featured.tab/>
                            <div class="card-body">
                                <h3 class="card-title">{featured.title}</h3>
                                <p class="card-text">{featured.summary}</p>
                                <h4>{featured.heading} ":"</h4>
                                <ul class="check-list">
                                    {featured.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </div>
                        </div>
                    })
                }}
            </section>

            <section class="panel panel-green text-center">
                <h3>"Support Our Projects"</h3>
                <p>
                    "Your support helps us expand the reach and impact of these projects. "
                    "Together, we can create a sustainable future for Kakondo and its communities."
                </p>
                <div class="button-row">
                    <A href=Page::GetInvolved.path() attr:class="btn btn-light">"Partner With Us"</A>
                    <A href=Page::News.path() attr:class="btn btn-outline-light">"Get Project Updates"</A>
                </div>
            </section>
        </div>

        {move || selected.get().map(|project| view! {
            <div class="modal-backdrop" on:click=move |_| set_selected.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| set_selected.set(None)>"✕"</button>
                    <img class="modal-image" src=project.image.clone() alt=project.title.clone()/>
                    <h2>{project.title.clone()}</h2>
                    <p>{project.details.clone()}</p>
                    <h4>"Outcomes"</h4>
                    <ul class="check-list">
                        {project.outcomes.iter().map(|o| view! { <li>{o.clone()}</li> }).collect_view()}
                    </ul>
                    <h4>"Partners"</h4>
                    <p>{project.partners.join(", ")}</p>
                </div>
            </div>
        })}
    }
}

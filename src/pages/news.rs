//! News and publications with search and filters

use kakondo_core::content::{self, news_kind_choices, NEWS_CATEGORIES};
use kakondo_core::domain::NewsItem;
use kakondo_core::filter::ALL_CHOICE;
use kakondo_core::form::schema::NEWSLETTER;
use kakondo_core::{Catalog, FilterCriteria, Selection};
use leptos::prelude::*;

use crate::components::{use_form, FormNotice, SubmitButton, TextField};

#[component]
pub fn NewsPage() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::new(content::news_items()));
    let criteria = RwSignal::new(FilterCriteria::new());

    let visible = Memo::new(move |_| {
        criteria.with(|criteria| catalog.with_value(|c| c.filter(criteria).into_iter().cloned().collect::<Vec<_>>()))
    });

    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <h1 class="page-title">"News & Publications"</h1>
                <p class="lead">
                    "Stay updated with the latest news, publications, and press releases from Kakondo Protected Area Management Inc."
                </p>
            </div>

            <section class="filter-grid">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search news..."
                    prop:value=move || criteria.with(|c| c.search_text.clone())
                    on:input=move |ev| criteria.update(|c| c.search_text = event_target_value(&ev))
                />
                <select
                    prop:value=move || criteria.with(|c| c.category.as_choice().to_string())
                    on:change=move |ev| {
                        let choice = event_target_value(&ev);
                        criteria.update(|c| c.category = Selection::from_choice(&choice))
                    }
                >
                    {NEWS_CATEGORIES.iter().map(|category| {
                        let label = if *category == ALL_CHOICE { "All Categories" } else { *category };
                        view! { <option value=*category>{label}</option> }
                    }).collect_view()}
                </select>
                <select
                    prop:value=move || criteria.with(|c| c.kind.as_choice().to_string())
                    on:change=move |ev| criteria.update(|c| c.kind = Selection::from_choice(&event_target_value(&ev)))
                >
                    {news_kind_choices().into_iter().map(|(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
                <button
                    class="btn btn-outline"
                    disabled=move || criteria.with(|c| c.is_default())
                    on:click=move |_| criteria.update(|c| c.reset())
                >
                    "Clear Filters"
                </button>
            </section>

            <section class="grid grid-3">
                <For
                    each=move || visible.get()
                    key=|item: &NewsItem| item.id.clone()
                    children=|item: NewsItem| view! {
                        <article class="card">
                            <img class="card-image" src=item.image.clone() alt=item.title.clone()/>
                            <div class="card-body">
                                <div class="row-between">
                                    <span class=item.kind.badge_class()>{item.kind.label()}</span>
                                    <span class="muted">{item.formatted_date()}</span>
                                </div>
                                <h3 class="card-title">{item.title.clone()}</h3>
                                <p class="card-text">{item.description.clone()}</p>
                                <div class="row-between">
                                    <span class="muted">{item.category.clone()}</span>
                                    {item.download_url.clone().map(|url| view! {
                                        <a class="btn btn-outline btn-sm" href=url>"Download"</a>
                                    })}
                                </div>
                            </div>
                        </article>
                    }
                />
            </section>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="empty-state">
                    <h3>"No results found"</h3>
                    <p>"Try adjusting your search criteria or filters"</p>
                </div>
            </Show>

            <NewsletterSignup/>
        </div>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let form = use_form(&NEWSLETTER);

    view! {
        <section class="panel panel-tinted text-center">
            <h3>"Stay Informed"</h3>
            <p>
                "Subscribe to our newsletter to receive the latest updates on conservation efforts and community development."
            </p>
            <form
                class="inline-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    form.submit(|_| ());
                }
            >
                <TextField form=form field="email" input_type="email" placeholder="Enter your email"/>
                <SubmitButton form=form label="Subscribe" pending_label="Subscribing..."/>
            </form>
            <FormNotice form=form success="Thank you for subscribing! Watch your inbox for our next update."/>
        </section>
    }
}

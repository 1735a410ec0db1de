//! Dashboard
//!
//! Manages the session's CBO network and staff roster. All reads and writes
//! go through the repositories in `AppContext`; the dashboard store mirrors
//! them for rendering.

use kakondo_core::content::{self, STAFF_STATUS_CHOICES, WARD_CHOICES};
use kakondo_core::domain::{Cbo, CboStatus, NewsKind, StaffContact, StaffStatus};
use kakondo_core::form::schema::{ADD_CBO, ADD_STAFF};
use kakondo_core::{aggregate, Catalog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::commands;
use crate::components::{
    use_form, ChoiceButtons, ConfirmButton, FormNotice, SelectField, StatCard, SubmitButton, TextField,
};
use crate::context::use_app_context;
use crate::routes::Page;
use crate::store::{
    store_add_cbo, store_add_staff, store_remove_cbo, store_remove_staff, store_update_cbo, use_dashboard_store,
    DashboardStateStoreFields,
};

const TABS: [(&str, &str); 3] = [
    ("cbos", "CBOs Management"),
    ("team", "Team Management"),
    ("content", "Content Management"),
];

fn cbo_badge(status: CboStatus) -> &'static str {
    match status {
        CboStatus::Active => "badge badge-green",
        CboStatus::Inactive => "badge badge-gray",
    }
}

fn staff_badge(status: StaffStatus) -> &'static str {
    match status {
        StaffStatus::Active => "badge badge-green",
        StaffStatus::Volunteer => "badge badge-blue",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let (tab, set_tab) = signal("cbos".to_string());

    // Fill the store once per session
    let repos = (ctx.cbos.clone(), ctx.staff.clone());
    Effect::new(move |_| {
        if store.loaded().get_untracked() {
            return;
        }
        let (cbo_repo, staff_repo) = repos.clone();
        spawn_local(async move {
            let cbos = commands::list_cbos(&cbo_repo).await;
            let staff = commands::list_staff(&staff_repo).await;
            match (cbos, staff) {
                (Ok(cbos), Ok(staff)) => {
                    log::debug!("Loaded {} CBOs and {} staff", cbos.len(), staff.len());
                    store.cbos().set(cbos);
                    store.staff().set(staff);
                    store.loaded().set(true);
                }
                (Err(e), _) | (_, Err(e)) => log::error!("Failed to load dashboard: {}", e),
            }
        });
    });

    let cbo_stats = Memo::new(move |_| store.cbos().with(|cbos| aggregate(cbos.iter())));
    let staff_total = Memo::new(move |_| store.staff().with(|staff| staff.len()));
    let coverage = ctx.config.coverage_wards;

    view! {
        <div class="section container">
            <div class="row-between page-header">
                <div>
                    <h1 class="page-title">"Dashboard"</h1>
                    <p class="muted">"Manage CBOs, team members, and organizational data"</p>
                </div>
                <span class="badge badge-green">"Admin Access"</span>
            </div>

            <section class="grid grid-4">
                <StatCard
                    value=Signal::derive(move || cbo_stats.with(|s| s.total.to_string()))
                    label="Total CBOs"
                    detail=Signal::derive(move || {
                        cbo_stats.with(|s| format!("{} active organizations", s.count(CboStatus::Active)))
                    })
                />
                <StatCard
                    value=Signal::derive(move || cbo_stats.with(|s| s.sum.to_string()))
                    label="Total Members"
                    detail="Across all CBOs".to_string()
                />
                <StatCard
                    value=Signal::derive(move || staff_total.get().to_string())
                    label="Team Members"
                    detail="Active staff and volunteers".to_string()
                />
                <StatCard value=coverage.to_string() label="Coverage Area" detail="Council wards".to_string()/>
            </section>

            <ChoiceButtons
                choices=TABS.to_vec()
                current=tab
                on_change=move |value| set_tab.set(value)
                class="choice-row tabs"
            />

            <Show when=move || !store.loaded().get()>
                <p class="muted">"Loading..."</p>
            </Show>

            {move || match tab.get().as_str() {
                "team" => view! { <StaffManagement/> }.into_any(),
                "content" => view! { <ContentManagement/> }.into_any(),
                _ => view! { <CboManagement/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CboManagement() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let form = use_form(&ADD_CBO);
    let (adding, set_adding) = signal(false);

    let repo = ctx.cbos.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let repo = repo.clone();
        form.submit(move |submission| {
            spawn_local(async move {
                if let Ok(created) = commands::add_cbo(&repo, &submission.fields).await {
                    store_add_cbo(&store, created);
                    set_adding.set(false);
                }
            });
        });
    };

    view! {
        <section class="card">
            <div class="card-body">
                <div class="row-between">
                    <div>
                        <h3 class="card-title">"Community-Based Organizations"</h3>
                        <p class="muted">"Manage affiliated CBOs and their member details"</p>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| set_adding.update(|open| *open = !*open)>
                        "Add CBO"
                    </button>
                </div>

                <Show when=move || adding.get()>
                    <form class="form panel" on:submit=on_submit.clone()>
                        <h4>"Add New CBO"</h4>
                        <p class="muted">"Add a new Community-Based Organization to the network"</p>
                        <TextField form=form field="name" placeholder="Enter CBO name"/>
                        <TextField form=form field="location" placeholder="Village/Location"/>
                        <SelectField form=form field="ward" choices=WARD_CHOICES placeholder="Select ward"/>
                        <TextField form=form field="contact" input_type="tel" placeholder="Phone number"/>
                        <SubmitButton form=form label="Add CBO" pending_label="Adding..."/>
                    </form>
                </Show>
                <FormNotice form=form success="CBO added to the network."/>

                <div class="stack">
                    <For
                        each=move || store.cbos().get()
                        key=|cbo: &Cbo| (cbo.id.clone(), cbo.status)
                        children=move |cbo: Cbo| view! { <CboRow cbo=cbo/> }
                    />
                </div>
                <Show when=move || store.loaded().get() && store.cbos().with(|c| c.is_empty())>
                    <p class="empty-state">"No CBOs registered yet"</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CboRow(cbo: Cbo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let id = cbo.id.clone();

    let toggle = {
        let repo = ctx.cbos.clone();
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| {
            let repo = repo.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Ok(updated) = commands::toggle_cbo_status(&repo, &id).await {
                    store_update_cbo(&store, updated);
                }
            });
        }
    };

    let remove = {
        let repo = ctx.cbos.clone();
        move |_: ()| {
            let repo = repo.clone();
            let id = id.clone();
            spawn_local(async move {
                if commands::remove_cbo(&repo, &id).await.is_ok() {
                    store_remove_cbo(&store, &id);
                }
            });
        }
    };

    let prompt = format!("Remove {}?", cbo.name);
    let toggle_label = match cbo.status {
        CboStatus::Active => "Deactivate",
        CboStatus::Inactive => "Activate",
    };

    view! {
        <article class="list-row">
            <div class="row-between">
                <div>
                    <h4>{cbo.name.clone()}</h4>
                    <p class="muted">{format!("{}, {}", cbo.location, cbo.ward)}</p>
                </div>
                <div class="row-actions">
                    <span class=cbo_badge(cbo.status)>{cbo.status.as_str()}</span>
                    <button class="btn btn-ghost btn-sm" on:click=toggle>{toggle_label}</button>
                    <ConfirmButton label="Delete" prompt=prompt on_confirm=remove/>
                </div>
            </div>
            <div class="grid grid-3 row-details">
                <span><strong>"Members: "</strong>{cbo.members}</span>
                <span>{cbo.contact.clone()}</span>
                <span><strong>"Est.: "</strong>{cbo.established.clone()}</span>
            </div>
            {(!cbo.activities.is_empty()).then(|| view! {
                <div class="tag-row">
                    <span class="muted">"Activities:"</span>
                    {cbo.activities.iter().map(|activity| view! {
                        <span class="badge badge-outline">{activity.clone()}</span>
                    }).collect_view()}
                </div>
            })}
        </article>
    }
}

#[component]
fn StaffManagement() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let form = use_form(&ADD_STAFF);
    let (adding, set_adding) = signal(false);

    let repo = ctx.staff.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let repo = repo.clone();
        form.submit(move |submission| {
            spawn_local(async move {
                if let Ok(created) = commands::add_staff(&repo, &submission.fields).await {
                    store_add_staff(&store, created);
                    set_adding.set(false);
                }
            });
        });
    };

    view! {
        <section class="card">
            <div class="card-body">
                <div class="row-between">
                    <div>
                        <h3 class="card-title">"Team Members"</h3>
                        <p class="muted">"Manage executive team and volunteer staff"</p>
                    </div>
                    <button class="btn btn-primary" on:click=move |_| set_adding.update(|open| *open = !*open)>
                        "Add Member"
                    </button>
                </div>

                <Show when=move || adding.get()>
                    <form class="form panel" on:submit=on_submit.clone()>
                        <h4>"Add Team Member"</h4>
                        <div class="grid grid-2">
                            <TextField form=form field="name" placeholder="Enter full name"/>
                            <TextField form=form field="position" placeholder="Role or title"/>
                            <TextField form=form field="email" input_type="email" placeholder="name@example.com"/>
                            <TextField form=form field="phone" input_type="tel" placeholder="Phone number"/>
                            <SelectField form=form field="ward" choices=WARD_CHOICES placeholder="Select ward"/>
                            <SelectField form=form field="status" choices=STAFF_STATUS_CHOICES placeholder="Select status"/>
                        </div>
                        <SubmitButton form=form label="Add Member" pending_label="Adding..."/>
                    </form>
                </Show>
                <FormNotice form=form success="Team member added."/>

                <div class="stack">
                    <For
                        each=move || store.staff().get()
                        key=|contact: &StaffContact| contact.id.clone()
                        children=move |contact: StaffContact| view! { <StaffRow contact=contact/> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StaffRow(contact: StaffContact) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();

    let remove = {
        let repo = ctx.staff.clone();
        let id = contact.id.clone();
        move |_: ()| {
            let repo = repo.clone();
            let id = id.clone();
            spawn_local(async move {
                if commands::remove_staff(&repo, &id).await.is_ok() {
                    store_remove_staff(&store, &id);
                }
            });
        }
    };

    let prompt = format!("Remove {} from the roster?", contact.name);

    view! {
        <article class="list-row">
            <div class="row-between">
                <div>
                    <h4>{contact.name.clone()}</h4>
                    <p class="muted">{contact.position.clone()}</p>
                    <div class="row-details">
                        <span>{contact.email.clone()}</span>
                        <span>{contact.phone.clone()}</span>
                        <span>{contact.ward.clone()}</span>
                    </div>
                </div>
                <div class="row-actions">
                    <span class=staff_badge(contact.status)>{contact.status.as_str()}</span>
                    <ConfirmButton label="Delete" prompt=prompt on_confirm=remove/>
                </div>
            </div>
        </article>
    }
}

/// Read-only content overview with links to the public pages
#[component]
fn ContentManagement() -> impl IntoView {
    let store = use_dashboard_store();
    let news = Catalog::new(content::news_items());
    let kind_counts: Vec<(&str, usize)> = NewsKind::ALL
        .into_iter()
        .map(|kind| (kind.label(), news.select(|item| item.kind == kind).len()))
        .collect();
    let projects = Catalog::new(content::projects()).aggregate();
    let staff_stats = Memo::new(move |_| store.staff().with(|staff| aggregate(staff.iter())));

    view! {
        <div class="grid grid-2">
            <section class="card">
                <div class="card-body">
                    <h3 class="card-title">"News & Publications"</h3>
                    <p class="muted">"Manage website content and publications"</p>
                    <ul class="role-list">
                        <li><strong>{news.len()}</strong>" entries published"</li>
                        {kind_counts.into_iter().map(|(label, count)| view! {
                            <li>{label}": "{count}</li>
                        }).collect_view()}
                    </ul>
                    <A href=Page::News.path() attr:class="btn btn-outline btn-block">"Manage Content"</A>
                </div>
            </section>
            <section class="card">
                <div class="card-body">
                    <h3 class="card-title">"Analytics & Reports"</h3>
                    <p class="muted">"Programme and membership figures"</p>
                    <ul class="role-list">
                        <li>{projects.total}" projects, "{projects.sum}" beneficiaries"</li>
                        <li>
                            {move || staff_stats.with(|s| format!("{} active staff", s.count(StaffStatus::Active)))}
                        </li>
                        <li>
                            {move || staff_stats.with(|s| format!("{} volunteers", s.count(StaffStatus::Volunteer)))}
                        </li>
                    </ul>
                    <A href=Page::Projects.path() attr:class="btn btn-outline btn-block">"View Projects"</A>
                </div>
            </section>
        </div>
    }
}

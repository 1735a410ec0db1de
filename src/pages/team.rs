//! Team profiles by member type

use kakondo_core::content::{self, BOARD_OFFICERS, BOARD_TRIBAL_REPRESENTATIVES};
use kakondo_core::domain::{MemberKind, TeamMember};
use kakondo_core::Catalog;
use leptos::prelude::*;

use crate::components::StatCard;

/// Sections in display order: (kind, heading)
const SECTIONS: [(MemberKind, &str); 3] = [
    (MemberKind::Executive, "Executive Leadership"),
    (MemberKind::Program, "Program Staff"),
    (MemberKind::Volunteer, "Volunteers & Advisors"),
];

#[component]
pub fn TeamPage() -> impl IntoView {
    let catalog = StoredValue::new(Catalog::new(content::team_members()));
    let stats = catalog.with_value(|c| c.aggregate());
    let (profile, set_profile) = signal(None::<TeamMember>);

    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <h1 class="page-title">"Our Team"</h1>
                <p class="lead">
                    "Dedicated professionals and volunteers working together to protect Kakondo's natural heritage "
                    "and empower local communities."
                </p>
            </div>

            <section class="grid grid-4">
                <StatCard value=stats.total.to_string() label="Team Members"/>
                <StatCard value=stats.count(MemberKind::Executive).to_string() label="Executives"/>
                <StatCard value=stats.count(MemberKind::Program).to_string() label="Program Staff"/>
                <StatCard value=stats.count(MemberKind::Volunteer).to_string() label="Volunteers"/>
            </section>

            {SECTIONS.into_iter().map(|(kind, heading)| {
                let members: Vec<TeamMember> =
                    catalog.with_value(|c| c.select(|m| m.kind == kind).into_iter().cloned().collect());
                view! {
                    <section class="section">
                        <h2>{heading}</h2>
                        <div class="grid grid-4">
                            {members.into_iter().map(|member| {
                                let chosen = member.clone();
                                view! {
                                    <article
                                        class="card profile-card"
                                        on:click=move |_| set_profile.set(Some(chosen.clone()))
                                    >
                                        {member.image.clone().map(|src| view! {
                                            <img class="avatar" src=src alt=member.name.clone()/>
                                        })}
                                        <div class="card-body text-center">
                                            <span class=member.kind.badge_class()>{member.kind.label()}</span>
                                            <h3 class="card-title">{member.name.clone()}</h3>
                                            <p class="muted">{member.position.clone()}</p>
                                            <p class="card-text">{member.specialization.clone()}</p>
                                            <span class="link">"View Profile"</span>
                                        </div>
                                    </article>
                                }
                            }).collect_view()}
                        </div>
                    </section>
                }
            }).collect_view()}

            <section class="section">
                <h2>"Board Composition"</h2>
                <p class="lead">
                    "The board represents the seven tribes of the Kakondo area, keeping traditional leadership at the heart of decision-making."
                </p>
                <div class="grid grid-2">
                    <div class="card">
                        <h3 class="card-title">"Board Officers"</h3>
                        <ul class="role-list">
                            {BOARD_OFFICERS.iter().map(|(role, tribe)| view! {
                                <li><strong>{*role}</strong> " · " {*tribe}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Tribal Representatives"</h3>
                        <ul class="role-list">
                            {BOARD_TRIBAL_REPRESENTATIVES.iter().map(|(role, tribe)| view! {
                                <li><strong>{*role}</strong> " · " {*tribe}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </section>
        </div>

        {move || profile.get().map(|member| view! {
            <div class="modal-backdrop" on:click=move |_| set_profile.set(None)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" on:click=move |_| set_profile.set(None)>"✕"</button>
                    <h2>{member.name.clone()}</h2>
                    <p class="muted">{member.position.clone()}</p>
                    <dl class="profile-facts">
                        <dt>"Age"</dt><dd>{member.age}</dd>
                        <dt>"Gender"</dt><dd>{member.gender.clone()}</dd>
                        <dt>"Qualification"</dt><dd>{member.qualification.clone()}</dd>
                        <dt>"Specialization"</dt><dd>{member.specialization.clone()}</dd>
                        <dt>"Email"</dt><dd><a href=format!("mailto:{}", member.email)>{member.email.clone()}</a></dd>
                        <dt>"Phone"</dt><dd>{member.phone.clone()}</dd>
                    </dl>
                    <h4>"Background"</h4>
                    <p>{member.background.clone()}</p>
                </div>
            </div>
        })}
    }
}

//! Ways to get involved and the application form

use kakondo_core::content::pages::{
    AVAILABILITY, IMPACT, INTERESTS, INVOLVEMENT_CHOICES, INVOLVEMENT_TYPES, VOLUNTEER_OPPORTUNITIES,
};
use kakondo_core::form::schema::GET_INVOLVED;
use kakondo_core::form::FormAction;
use leptos::prelude::*;

use crate::components::{
    use_form, CheckboxField, ChoicesField, FormNotice, RadioField, SelectField, SubmitButton, TextAreaField,
    TextField,
};

#[component]
pub fn GetInvolvedPage() -> impl IntoView {
    let form = use_form(&GET_INVOLVED);
    let (highlighted, set_highlighted) = signal(None::<&'static str>);

    let choose = move |id: &'static str| {
        set_highlighted.set(Some(id));
        form.dispatch(FormAction::set("involvement_type", id));
    };

    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <h1 class="page-title">"Get Involved"</h1>
                <p class="lead">
                    "Join us in protecting Kakondo's unique ecosystems and empowering local communities. "
                    "There are many ways to contribute to our conservation mission."
                </p>
            </div>

            <section class="grid grid-4">
                {INVOLVEMENT_TYPES.iter().map(|(id, blurb)| {
                    let id = *id;
                    view! {
                        <article
                            class="card card-selectable"
                            class:selected=move || highlighted.get() == Some(id)
                            on:click=move |_| choose(id)
                        >
                            <div class="card-body text-center">
                                <h3 class="card-title">{blurb.title}</h3>
                                <p class="card-text">{blurb.description}</p>
                            </div>
                        </article>
                    }
                }).collect_view()}
            </section>

            <section class="section">
                <h2 class="text-center">"Volunteer Opportunities"</h2>
                <div class="grid grid-2">
                    {VOLUNTEER_OPPORTUNITIES.iter().map(|opportunity| view! {
                        <div class="card">
                            <div class="card-body">
                                <h3 class="card-title">{opportunity.title}</h3>
                                <p class="card-text">{opportunity.description}</p>
                                <p class="muted"><strong>"Requirements: "</strong>{opportunity.requirements}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="section narrow">
                <div class="card">
                    <div class="card-body">
                        <h2 class="card-title">"Application Form"</h2>
                        <p class="muted">
                            "Fill out this form to express your interest in getting involved with Kakondo Protected Area Management Inc."
                        </p>
                        <form
                            class="form"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                form.submit(move |submission| {
                                    set_highlighted.set(None);
                                    log::info!(
                                        "Application received for {}",
                                        submission.fields.text("involvement_type")
                                    );
                                });
                            }
                        >
                            <div class="grid grid-2">
                                <TextField form=form field="name" placeholder="Enter your full name"/>
                                <TextField form=form field="email" input_type="email" placeholder="Enter your email"/>
                                <TextField form=form field="phone" input_type="tel" placeholder="Enter your phone number"/>
                                <TextField form=form field="location" placeholder="City, Province/State, Country"/>
                            </div>

                            <RadioField form=form field="involvement_type" choices=INVOLVEMENT_CHOICES/>
                            <ChoicesField form=form field="interests" items=INTERESTS/>

                            <TextAreaField
                                form=form
                                field="skills"
                                rows=3
                                placeholder="Describe your relevant skills, qualifications, and expertise..."
                            />
                            <TextAreaField
                                form=form
                                field="experience"
                                rows=3
                                placeholder="Tell us about any previous experience in conservation, community work, or related fields..."
                            />
                            <SelectField form=form field="availability" choices=AVAILABILITY placeholder="Select your availability"/>
                            <TextAreaField
                                form=form
                                field="motivation"
                                placeholder="Tell us what motivates you to join our conservation efforts..."
                            />
                            <CheckboxField form=form field="agreed_to_terms"/>

                            <SubmitButton form=form label="Submit Application" pending_label="Submitting Application..."/>
                        </form>
                        <FormNotice form=form success="Thank you for your interest! We will contact you soon."/>
                    </div>
                </div>
            </section>

            <section class="panel panel-tinted">
                <div class="text-center">
                    <h3>"Your Impact Matters"</h3>
                    <p class="lead">
                        "Every contribution, whether time, skills, or resources, helps us protect over 7,000 hectares "
                        "of pristine forest and empower 18,000 indigenous landowners across 8 council wards."
                    </p>
                </div>
                <div class="grid grid-3">
                    {IMPACT.iter().map(|impact| view! {
                        <div class="text-center">
                            <h4>{impact.title}</h4>
                            <p class="muted">{impact.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

//! Contact details and the contact form

use kakondo_core::content::pages::{choice_label, INQUIRY_TYPES};
use kakondo_core::form::schema::CONTACT;
use kakondo_core::form::FormAction;
use leptos::prelude::*;

use crate::components::{
    use_form, CheckboxField, FormHandle, FormNotice, SelectField, SubmitButton, TextAreaField, TextField,
};
use crate::context::use_app_context;

/// Quick actions preset the inquiry type: (label, inquiry value)
const QUICK_ACTIONS: [(&str, &str); 3] = [
    ("Volunteer Application", "volunteer"),
    ("Partnership Inquiry", "partnership"),
    ("Media Inquiry", "media"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = use_form(&CONTACT);

    view! {
        <div class="section container">
            <div class="section-heading text-center">
                <h1 class="page-title">"Contact Us"</h1>
                <p class="lead">
                    "Get in touch with us to learn more about our conservation efforts, partnership opportunities, "
                    "or how you can get involved in protecting Kakondo's natural heritage."
                </p>
            </div>

            <div class="grid grid-contact">
                <aside>
                    <ContactDetails/>
                    <div class="card">
                        <div class="card-body">
                            <h3 class="card-title">"Quick Actions"</h3>
                            <div class="stack">
                                {QUICK_ACTIONS.into_iter().map(|(label, inquiry)| view! {
                                    <button
                                        class="btn btn-outline btn-block"
                                        on:click=move |_| form.dispatch(FormAction::set("inquiry_type", inquiry))
                                    >
                                        {label}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </aside>

                <ContactForm form=form/>
            </div>

            <section class="card map-card">
                <div class="card-body">
                    <h3 class="card-title">"Find Us Here"</h3>
                    <p class="muted">"Kakondo Protected Area is located in the central highlands of Papua New Guinea"</p>
                    <div class="map-placeholder">
                        <p>"Interactive map will be displayed here"</p>
                        <p class="muted">"Coordinates: Central Highlands, Simbu Province, PNG"</p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    let contact = use_app_context().config.contact.clone();
    let lines = |items: Vec<String>| items.into_iter().map(|line| view! { <p>{line}</p> }).collect_view();

    view! {
        <div class="card">
            <div class="card-body contact-details">
                <h3 class="card-title">"Get in Touch"</h3>
                <div>
                    <h4>"Address"</h4>
                    {lines(contact.address_lines)}
                </div>
                <div>
                    <h4>"Phone"</h4>
                    {lines(contact.phones)}
                </div>
                <div>
                    <h4>"Email"</h4>
                    {lines(contact.emails)}
                </div>
                <div>
                    <h4>"Office Hours"</h4>
                    {lines(contact.office_hours)}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContactForm(form: FormHandle) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <h3 class="card-title">"Send Us a Message"</h3>
                <p class="muted">"Fill out the form below and we'll get back to you as soon as possible."</p>

                <form
                    class="form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        form.submit(|submission| {
                            let inquiry = choice_label(INQUIRY_TYPES, submission.fields.text("inquiry_type"));
                            log::info!("Contact message ({}) sent by {}", inquiry, submission.fields.text("email"));
                        });
                    }
                >
                    <div class="grid grid-2">
                        <TextField form=form field="name" placeholder="Enter your full name"/>
                        <TextField form=form field="email" input_type="email" placeholder="Enter your email"/>
                    </div>
                    <div class="grid grid-2">
                        <TextField form=form field="phone" input_type="tel" placeholder="Enter your phone number"/>
                        <SelectField form=form field="inquiry_type" choices=INQUIRY_TYPES placeholder="Select inquiry type"/>
                    </div>
                    <TextField form=form field="subject" placeholder="Enter the subject of your message"/>
                    <TextAreaField form=form field="message" rows=6 placeholder="Enter your message here..."/>

                    <CheckboxField form=form field="volunteer"/>
                    <CheckboxField form=form field="agreed_to_terms"/>
                    <CheckboxField form=form field="human_check"/>

                    <SubmitButton form=form label="Send Message" pending_label="Sending..."/>
                </form>
                <FormNotice form=form success="Thank you for your message! We'll get back to you within 2-3 business days."/>
            </div>
        </div>
    }
}

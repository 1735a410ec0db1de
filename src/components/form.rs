//! Form bindings
//!
//! `use_form` wraps a `FormController` in a signal and drives submission
//! with the session submitter. Field components bind one schema field each
//! and take their label from the schema.

use gloo_timers::future::TimeoutFuture;
use kakondo_core::content::pages::Choice;
use kakondo_core::form::{FormAction, FormController, FormSchema, SubmitState, Submission, Submitter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::TimerSubmitter;
use crate::context::use_app_context;

#[derive(Clone, Copy)]
pub struct FormHandle {
    pub controller: RwSignal<FormController>,
    schema: &'static FormSchema,
    submitter: TimerSubmitter,
    notice_ms: u32,
}

pub fn use_form(schema: &'static FormSchema) -> FormHandle {
    let ctx = use_app_context();
    FormHandle {
        controller: RwSignal::new(FormController::new(schema)),
        schema,
        submitter: ctx.submitter(),
        notice_ms: ctx.config.notice_duration_ms,
    }
}

impl FormHandle {
    pub fn dispatch(&self, action: FormAction) {
        self.controller.update(|c| c.dispatch(action));
    }

    pub fn text(&self, field: &'static str) -> String {
        self.controller.with(|c| c.draft().text(field).to_string())
    }

    pub fn flag(&self, field: &'static str) -> bool {
        self.controller.with(|c| c.draft().flag(field))
    }

    pub fn contains(&self, field: &'static str, item: &str) -> bool {
        self.controller.with(|c| c.draft().contains(field, item))
    }

    /// Field named by the last rejected submit
    pub fn flagged(&self, field: &'static str) -> bool {
        self.controller.with(|c| c.is_flagged(field))
    }

    pub fn is_pending(&self) -> bool {
        self.controller.with(|c| c.is_pending())
    }

    pub fn state(&self) -> SubmitState {
        self.controller.with(|c| c.state().clone())
    }

    pub fn dismiss(&self) {
        self.controller.update(|c| c.dismiss());
    }

    fn label(&self, field: &'static str) -> &'static str {
        self.schema.label(field)
    }

    fn is_required(&self, field: &'static str) -> bool {
        self.schema.field(field).is_some_and(|f| f.required)
    }

    fn field_class(&self, field: &'static str) -> &'static str {
        if self.flagged(field) {
            "field field-missing"
        } else {
            "field"
        }
    }

    /// Validate and deliver. `on_submitted` runs after a successful
    /// delivery with the payload that was sent.
    pub fn submit(&self, on_submitted: impl FnOnce(Submission) + 'static) {
        let Some(Ok(submission)) = self.controller.try_update(|c| c.begin_submit()) else {
            return;
        };
        let controller = self.controller;
        let submitter = self.submitter;
        let notice_ms = self.notice_ms;

        spawn_local(async move {
            let outcome = submitter.submit(submission.clone()).await;
            let Some(Ok(_)) = controller.try_update(|c| c.complete(outcome)) else {
                return;
            };
            on_submitted(submission);

            let Some(seen) = controller.try_with_untracked(|c| c.completions()) else {
                return;
            };
            TimeoutFuture::new(notice_ms).await;
            controller.try_update(|c| c.expire_notice(seen));
        });
    }
}

#[component]
fn FieldLabel(form: FormHandle, field: &'static str) -> impl IntoView {
    view! {
        <span class="field-label">
            {form.label(field)}
            {form.is_required(field).then_some(" *")}
        </span>
    }
}

#[component]
pub fn TextField(
    form: FormHandle,
    field: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class=move || form.field_class(field)>
            <FieldLabel form=form field=field/>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || form.text(field)
                on:input=move |ev| form.dispatch(FormAction::set(field, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    form: FormHandle,
    field: &'static str,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class=move || form.field_class(field)>
            <FieldLabel form=form field=field/>
            <textarea
                rows=rows
                placeholder=placeholder
                prop:value=move || form.text(field)
                on:input=move |ev| form.dispatch(FormAction::set(field, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(
    form: FormHandle,
    field: &'static str,
    choices: &'static [Choice],
    #[prop(default = "Select an option")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class=move || form.field_class(field)>
            <FieldLabel form=form field=field/>
            <select
                prop:value=move || form.text(field)
                on:change=move |ev| form.dispatch(FormAction::set(field, event_target_value(&ev)))
            >
                <option value="">{placeholder}</option>
                {choices.iter().map(|(value, label)| view! {
                    <option value=*value selected=move || form.text(field) == *value>{*label}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn RadioField(form: FormHandle, field: &'static str, choices: &'static [Choice]) -> impl IntoView {
    view! {
        <fieldset class=move || form.field_class(field)>
            <legend><FieldLabel form=form field=field/></legend>
            {choices.iter().map(|(value, label)| view! {
                <label class="radio">
                    <input
                        type="radio"
                        name=field
                        value=*value
                        prop:checked=move || form.text(field) == *value
                        on:change=move |_| form.dispatch(FormAction::set(field, *value))
                    />
                    {*label}
                </label>
            }).collect_view()}
        </fieldset>
    }
}

#[component]
pub fn CheckboxField(form: FormHandle, field: &'static str) -> impl IntoView {
    view! {
        <label class=move || if form.flagged(field) { "checkbox field-missing" } else { "checkbox" }>
            <input
                type="checkbox"
                prop:checked=move || form.flag(field)
                on:change=move |ev| form.dispatch(FormAction::set(field, event_target_checked(&ev)))
            />
            <FieldLabel form=form field=field/>
        </label>
    }
}

/// Checkbox group over a multi-select field
#[component]
pub fn ChoicesField(form: FormHandle, field: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <fieldset class=move || form.field_class(field)>
            <legend><FieldLabel form=form field=field/></legend>
            <div class="checkbox-grid">
                {items.iter().map(|item| view! {
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.contains(field, item)
                            on:change=move |ev| {
                                form.dispatch(FormAction::toggle(field, *item, event_target_checked(&ev)))
                            }
                        />
                        {*item}
                    </label>
                }).collect_view()}
            </div>
        </fieldset>
    }
}

#[component]
pub fn SubmitButton(
    form: FormHandle,
    label: &'static str,
    #[prop(default = "Submitting...")] pending_label: &'static str,
) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary btn-block" disabled=move || form.is_pending()>
            {move || if form.is_pending() { pending_label } else { label }}
        </button>
    }
}

/// Success, failure and missing-field notices
#[component]
pub fn FormNotice(form: FormHandle, #[prop(into)] success: String) -> impl IntoView {
    let missing = move || {
        form.controller.with(|c| {
            c.hints().map(|hints| {
                hints
                    .missing
                    .iter()
                    .map(|field| form.label(*field))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
        })
    };

    view! {
        {move || missing().map(|fields| view! {
            <div class="notice notice-warning">"Please complete: " {fields}</div>
        })}
        {move || match form.state() {
            SubmitState::Submitted(_) => Some(view! {
                <div class="notice notice-success">
                    <span>{success.clone()}</span>
                    <button class="notice-close" on:click=move |_| form.dismiss()>"✕"</button>
                </div>
            }.into_any()),
            SubmitState::Failed { reason } => Some(view! {
                <div class="notice notice-error">
                    <span>"Something went wrong: " {reason} ". Your entries were kept, please try again."</span>
                    <button class="notice-close" on:click=move |_| form.dismiss()>"✕"</button>
                </div>
            }.into_any()),
            _ => None,
        }}
    }
}

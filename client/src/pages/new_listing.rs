//! Listing creation form with image picker and cancellable submit.
//!
//! DESIGN
//! ======
//! All form state is one `CreateForm` signal. Submitting validates locally,
//! takes a ticket, and completes it when the create call answers. Cancelling
//! while the call is in flight makes its answer stale so it is dropped
//! without touching the form.

#[cfg(test)]
#[path = "new_listing_test.rs"]
mod new_listing_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::draft::{DraftError, DraftField, DraftImage};
#[cfg(any(test, feature = "hydrate"))]
use market::submission::SubmitOutcome;
use market::submission::{CreateForm, SubmitTicket};
use market::{Category, Condition};

use crate::util::browser::{alert, history_back};
use crate::util::images::{images_from_input, revoke_previews, upload_hint};

const AFTER_SUBMIT_PATH: &str = "/my-products";

#[cfg(feature = "hydrate")]
const SUBMIT_SUCCESS_MESSAGE: &str = "Product listed successfully!";

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Creating Product..." } else { "Create Product" }
}

/// What the Cancel button does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CancelAction {
    /// Drop the in-flight create call and keep editing.
    AbortSubmit,
    /// Leave the form the way the browser's back button would.
    GoBack,
}

fn cancel_action(submitting: bool) -> CancelAction {
    if submitting { CancelAction::AbortSubmit } else { CancelAction::GoBack }
}

/// Append a picked batch. A rejected batch releases its own previews.
fn attach_batch(form: &mut CreateForm, batch: Vec<DraftImage>) -> Result<(), DraftError> {
    let rejected = batch.clone();
    form.draft.attach_images(batch).inspect_err(|_| revoke_previews(&rejected))
}

/// Remove one image and release its preview.
fn detach_image(form: &mut CreateForm, index: usize) -> bool {
    let removed = form.draft.remove_image(index);
    if let Some(image) = &removed {
        revoke_previews(std::slice::from_ref(image));
    }
    removed.is_some()
}

#[cfg(any(test, feature = "hydrate"))]
/// Apply the create answer for `ticket`.
///
/// An accepted draft is about to be reset, so its previews are released
/// first and returned; other outcomes keep the images on screen.
fn finish_submission(
    form: &mut CreateForm,
    ticket: &SubmitTicket,
    result: Result<market::submission::SubmitReceipt, String>,
) -> (SubmitOutcome, Vec<DraftImage>) {
    let shown = form.draft.images().to_vec();
    let outcome = form.complete(ticket, result);
    if matches!(outcome, SubmitOutcome::Accepted(_)) {
        revoke_previews(&shown);
        (outcome, shown)
    } else {
        (outcome, Vec::new())
    }
}

fn run_submission(form: RwSignal<CreateForm>, ticket: SubmitTicket, on_accepted: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::submit_listing(&ticket.listing).await;
        if let Err(e) = &result {
            log::warn!("create listing failed: {e}");
        }
        match form.try_update(|f| finish_submission(f, &ticket, result)).map(|(outcome, _)| outcome) {
            Some(SubmitOutcome::Accepted(receipt)) => {
                log::info!("listing accepted, receipt {}", receipt.receipt_id);
                alert(SUBMIT_SUCCESS_MESSAGE);
                on_accepted();
            }
            Some(SubmitOutcome::Stale) => log::debug!("dropping stale create response"),
            _ => {}
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, ticket, on_accepted);
    }
}

#[component]
pub fn NewListingPage() -> impl IntoView {
    let form = RwSignal::new(CreateForm::default());
    let validation = RwSignal::new(None::<String>);
    let image_warning = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let submitting = Memo::new(move |_| form.with(CreateForm::is_submitting));
    let images = Memo::new(move |_| form.with(|f| f.draft.images().to_vec()));
    let slots_left = Memo::new(move |_| form.with(|f| f.draft.remaining_image_slots()));

    let set_field = move |field: DraftField, value: String| {
        if let Some(Err(e)) = form.try_update(|f| f.draft.set_field(field, &value)) {
            validation.set(Some(e.to_string()));
        }
    };
    let bind = move |field: DraftField| move |ev: leptos::ev::Event| set_field(field, event_target_value(&ev));
    let value_of = move |field: DraftField| {
        move || {
            form.with(|f| match field {
                DraftField::Title => f.draft.title.clone(),
                DraftField::Description => f.draft.description.clone(),
                DraftField::Price => f.draft.price.clone(),
                DraftField::Location => f.draft.location.clone(),
                DraftField::Category => f.draft.category.map(|c| c.label().to_owned()).unwrap_or_default(),
                DraftField::Condition => f.draft.condition.map(|c| c.label().to_owned()).unwrap_or_default(),
            })
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        let batch = images_from_input(&ev);
        if batch.is_empty() {
            return;
        }
        match form.try_update(|f| attach_batch(f, batch)) {
            Some(Err(e)) => {
                let message = e.to_string();
                alert(&message);
                image_warning.set(Some(message));
            }
            _ => image_warning.set(None),
        }
    };

    let leave = move || navigate(AFTER_SUBMIT_PATH, NavigateOptions::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ticket = match form.try_update(CreateForm::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(DraftError::AlreadySubmitting)) | None => return,
            Some(Err(e)) => {
                validation.set(Some(e.to_string()));
                return;
            }
        };
        validation.set(None);
        run_submission(form, ticket, leave.clone());
    };

    let on_cancel = move |_| {
        match cancel_action(submitting.get_untracked()) {
            CancelAction::AbortSubmit => form.update(CreateForm::cancel_submit),
            CancelAction::GoBack => history_back(),
        }
    };

    view! {
        <div class="new-listing-page">
            <header class="page-header">
                <div>
                    <h1>"Sell an Item"</h1>
                    <p class="muted">"Create a listing to sell your item"</p>
                </div>
            </header>

            <form class="listing-form" on:submit=on_submit>
                <section class="card">
                    <h2>"Photos"</h2>
                    <div class="image-grid">
                        {move || {
                            images
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, image)| {
                                    view! {
                                        <div class="image-grid__item">
                                            <img src=image.preview_url alt=image.name/>
                                            {(index == 0).then(|| view! { <span class="image-grid__cover">"Cover"</span> })}
                                            <button
                                                type="button"
                                                class="image-grid__remove"
                                                on:click=move |_| {
                                                    form.update(|f| {
                                                        detach_image(f, index);
                                                    });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <Show when=move || { slots_left.get() > 0 }>
                            <label class="image-grid__add">
                                "Add Photo"
                                <input type="file" accept="image/*" multiple on:change=on_pick/>
                            </label>
                        </Show>
                    </div>
                    <p class="muted">{move || upload_hint(images.with(Vec::len))}</p>
                    {move || image_warning.get().map(|w| view! { <p class="form-warning">{w}</p> })}
                </section>

                <section class="card">
                    <h2>"Details"</h2>
                    <label class="field">
                        <span>"Title *"</span>
                        <input
                            type="text"
                            placeholder="What are you selling?"
                            prop:value=value_of(DraftField::Title)
                            on:input=bind(DraftField::Title)
                        />
                    </label>
                    <label class="field">
                        <span>"Description *"</span>
                        <textarea
                            rows="5"
                            placeholder="Describe your item in detail..."
                            prop:value=value_of(DraftField::Description)
                            on:input=bind(DraftField::Description)
                        ></textarea>
                    </label>
                    <div class="field-row">
                        <label class="field">
                            <span>"Price *"</span>
                            <input
                                type="number"
                                min="0"
                                step="0.01"
                                placeholder="0.00"
                                prop:value=value_of(DraftField::Price)
                                on:input=bind(DraftField::Price)
                            />
                        </label>
                        <label class="field">
                            <span>"Location *"</span>
                            <input
                                type="text"
                                placeholder="City, State"
                                prop:value=value_of(DraftField::Location)
                                on:input=bind(DraftField::Location)
                            />
                        </label>
                    </div>
                    <div class="field-row">
                        <label class="field">
                            <span>"Category *"</span>
                            <select prop:value=value_of(DraftField::Category) on:change=bind(DraftField::Category)>
                                <option value="">"Select a category"</option>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="field">
                            <span>"Condition *"</span>
                            <select prop:value=value_of(DraftField::Condition) on:change=bind(DraftField::Condition)>
                                <option value="">"Select condition"</option>
                                {Condition::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                </section>

                {move || validation.get().map(|e| view! { <p class="form-error">{e}</p> })}
                {move || form.with(|f| f.error().map(str::to_owned)).map(|e| view! { <p class="form-error">{e}</p> })}

                <div class="form-actions">
                    <button type="button" class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                        {move || submit_label(submitting.get())}
                    </button>
                </div>
            </form>
        </div>
    }
}

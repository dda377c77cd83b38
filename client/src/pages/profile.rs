//! Profile page: header card, stats, and a view/edit form.
//!
//! Saving leaves edit mode and forwards the edits to the server. The shown
//! profile is not replaced by them; it only changes on the next load.

use leptos::prelude::*;
use market::fixtures;
use market::profile::{ProfileEditor, ProfileField, ProfileForm, ProfileTab};

use crate::components::stat_card::StatCard;
use crate::state::session::SessionState;

const EDITABLE: [ProfileField; 5] =
    [ProfileField::FirstName, ProfileField::LastName, ProfileField::Email, ProfileField::Phone, ProfileField::Location];

fn forward_profile(edits: ProfileForm) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::save_profile(&edits).await {
            log::warn!("profile update not forwarded: {e}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = edits;
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = RwSignal::new(ProfileEditor::new(fixtures::demo_profile()));
    let tab = RwSignal::new(ProfileTab::Profile);

    let editing = Memo::new(move |_| editor.with(ProfileEditor::is_editing));
    let profile = move || editor.with(|e| e.profile().clone());
    let stats = move || editor.with(|e| e.profile().stats.clone());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(edits) = editor.try_update(ProfileEditor::save) {
            forward_profile(edits);
        }
    };

    view! {
        <div class="profile-page">
            <Show when=move || session.with(SessionState::needs_sign_in)>
                <p class="notice">"You are viewing a demo profile. " <a href="/login">"Log in"</a> " to see yours."</p>
            </Show>

            <section class="card profile-header">
                <div class="avatar avatar--large">{move || editor.with(|e| e.profile().initials())}</div>
                <div class="profile-header__info">
                    <h1>{move || editor.with(|e| e.profile().full_name())}</h1>
                    <p class="muted">{move || editor.with(|e| e.profile().location.clone())}</p>
                    <p class="muted">"Member since " {move || editor.with(|e| e.profile().member_since())}</p>
                </div>
                <button class="btn" on:click=move |_| editor.update(ProfileEditor::toggle_edit)>
                    {move || if editing.get() { "Cancel" } else { "Edit Profile" }}
                </button>
            </section>

            <div class="stat-grid">
                <StatCard value=Signal::derive(move || stats().sales.to_string()) label="Sales"/>
                <StatCard value=Signal::derive(move || stats().purchases.to_string()) label="Purchases"/>
                <StatCard value=Signal::derive(move || format!("{:.1}", stats().rating)) label="Rating" tone="yellow"/>
                <StatCard value=Signal::derive(move || stats().response_time) label="Response Time"/>
            </div>

            <div class="tabs" role="tablist">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {move || match tab.get() {
                ProfileTab::Profile => {
                    view! {
                        <Show
                            when=move || editing.get()
                            fallback=move || {
                                let p = profile();
                                view! {
                                    <section class="card profile-details">
                                        <dl>
                                            <dt>"Email"</dt>
                                            <dd>{p.email}</dd>
                                            <dt>"Phone"</dt>
                                            <dd>{p.phone}</dd>
                                            <dt>"Location"</dt>
                                            <dd>{p.location}</dd>
                                            <dt>"Bio"</dt>
                                            <dd>{p.bio}</dd>
                                        </dl>
                                    </section>
                                }
                            }
                        >
                            <form class="card profile-form" on:submit=on_save>
                                {EDITABLE
                                    .into_iter()
                                    .map(|field| view! { <ProfileInput editor=editor field=field/> })
                                    .collect::<Vec<_>>()}
                                <label class="field">
                                    <span>{ProfileField::Bio.label()}</span>
                                    <textarea
                                        rows="4"
                                        prop:value=move || editor.with(|e| e.form().bio.clone())
                                        on:input=move |ev| {
                                            editor.update(|e| e.set_field(ProfileField::Bio, event_target_value(&ev)));
                                        }
                                    ></textarea>
                                </label>
                                <div class="form-actions">
                                    <button type="button" class="btn" on:click=move |_| editor.update(ProfileEditor::cancel)>
                                        "Cancel"
                                    </button>
                                    <button type="submit" class="btn btn--primary">
                                        "Save Changes"
                                    </button>
                                </div>
                            </form>
                        </Show>
                    }
                        .into_any()
                }
                ProfileTab::Activity => {
                    view! {
                        <section class="card">
                            <p class="muted">"Recent activity will appear here."</p>
                        </section>
                    }
                        .into_any()
                }
                ProfileTab::Settings => {
                    view! {
                        <section class="card">
                            <p class="muted">"Account settings are coming soon."</p>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ProfileInput(editor: RwSignal<ProfileEditor>, field: ProfileField) -> impl IntoView {
    let kind = match field {
        ProfileField::Email => "email",
        ProfileField::Phone => "tel",
        _ => "text",
    };
    view! {
        <label class="field">
            <span>{field.label()}</span>
            <input
                type=kind
                prop:value=move || editor.with(|e| e.form().get(field).to_owned())
                on:input=move |ev| editor.update(|e| e.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}

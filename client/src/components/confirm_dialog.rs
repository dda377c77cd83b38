//! Modal yes/no confirmation.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

/// Keys that dismiss the dialog as a cancel.
fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Confirmation dialog. Clicking the backdrop or pressing Escape counts as
/// cancel. The backdrop takes focus on mount so key presses reach it.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Confirm".to_owned())] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let backdrop_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = backdrop_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_cancel_key(&ev.key()) {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="dialog-backdrop"
            tabindex="-1"
            node_ref=backdrop_ref
            on:click=move |_| on_cancel.run(())
            on:keydown=on_keydown
        >
            <div class="dialog" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

//! Blocking modal for request failures.

use leptos::prelude::*;

/// Dismissible error dialog; hidden while `message` is `None`.
#[component]
pub fn ErrorModal(#[prop(into)] message: Signal<Option<String>>, on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || message.get().is_some()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--error"
                    role="alertdialog"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2>"Request failed"</h2>
                    <p class="dialog__message">{move || message.get().unwrap_or_default()}</p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

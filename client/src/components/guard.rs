//! Route guards for authenticated and permission-gated content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Render `children` only with a session; otherwise redirect to `/login`.
///
/// While the stored session is still being read a loading placeholder is shown.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(|s| !s.loading && s.has_token)
            fallback=move || {
                view! {
                    <Show when=move || auth.with(|s| s.loading)>
                        <div class="page-loading">"Loading..."</div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Render `children` only when the user holds `permission`.
#[component]
pub fn RequirePermission(#[prop(into)] permission: String, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! { <Show when=move || auth.get().has_permission(&permission)>{children()}</Show> }
}

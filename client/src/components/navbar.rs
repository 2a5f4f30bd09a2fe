//! Top navigation bar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let client = crate::net::http::ApiClient::from_context();

    // The route guard sends the browser to /login once the session is gone.
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                crate::util::auth::logout(auth, &client).await;
            });
        }
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Slow Query Console"</A>
            <div class="navbar__links">
                <A href="/" attr:class="navbar__link">"Slow Queries"</A>
                <A href="/stats" attr:class="navbar__link">"User Statistics"</A>
            </div>
            <Show when=move || auth.get().user.is_some()>
                <div class="navbar__user">
                    <span class="navbar__name">{move || auth.get().display_name().unwrap_or_default()}</span>
                    <button class="btn btn--outline" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Outlet, ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::navbar::Navbar;
use crate::config::ConsoleConfig;
use crate::pages::{
    login::LoginPage, query_detail::QueryDetailPage, query_list::QueryListPage, user_stats::UserStatsPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and config contexts, restores the stored session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let auth = RwSignal::new(AuthState::default());
    provide_context(config);
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        let client = crate::net::http::ApiClient::from_context();
        let session = client.session().clone();
        leptos::task::spawn_local(async move {
            crate::util::auth::initialize(auth, &client).await;
        });

        // Login or logout in another tab.
        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            if crate::util::auth::is_session_key(ev.key().as_deref()) {
                auth.update(|state| crate::util::auth::sync_from_store(state, &session));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/slowlog-console.css"/>
        <Title text="Slow Query Console"/>

        <Router>
            <ErrorBoundary fallback=|_errors| {
                view! { <div class="alert alert--danger">"Something went wrong. Reload the page to try again."</div> }
            }>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=AuthenticatedLayout>
                        <Route path=StaticSegment("") view=QueryListPage/>
                        <Route path=StaticSegment("stats") view=UserStatsPage/>
                        <Route path=(StaticSegment("query"), ParamSegment("checksum")) view=QueryDetailPage/>
                    </ParentRoute>
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}

/// Navigation bar plus the guarded route outlet.
#[component]
fn AuthenticatedLayout() -> impl IntoView {
    view! {
        <Navbar/>
        <main class="container">
            <RequireAuth>
                <Outlet/>
            </RequireAuth>
        </main>
    }
}

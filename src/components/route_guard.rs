//! Router-mounted component that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once inside `<Router>`, before the routes. It watches the
//! current pathname and the session signal and re-runs the guard decision
//! whenever either changes, which covers both link navigation and a
//! session expiring underneath an open dashboard.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::guard::install_route_guard;

#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    install_route_guard(session, pathname, navigate);

    // Renders nothing; exists only to anchor the guard effect.
    ()
}

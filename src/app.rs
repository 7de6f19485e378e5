//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, admin_login::AdminLoginPage,
    employee_dashboard::EmployeeDashboardPage, home::HomePage, login::LoginPage,
    manager_dashboard::ManagerDashboardPage, signup::SignupPage,
};
use crate::util::session_storage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Nothing in this crate calls it; a host binary built with the `ssr`
/// feature passes it to its leptos integration to serve the app.
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
/// Provides the session context, mounts the navigation guard, and wires
/// every path of the route table to its page. The guard sits inside the
/// router so it sees each navigation attempt before the page settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session context, hydrated from localStorage in the browser.
    let session = RwSignal::new(session_storage::load_session());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-ui.css"/>
        <Title text="Task Portal"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("adminlogin") view=AdminLoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=AdminDashboardPage/>
                <Route path=(StaticSegment("manager"), StaticSegment("dashboard")) view=ManagerDashboardPage/>
                <Route path=(StaticSegment("employee"), StaticSegment("dashboard")) view=EmployeeDashboardPage/>
            </Routes>
        </Router>
    }
}

//! Manager dashboard route. Entry is gated by the navigation guard.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="dashboard dashboard--manager">
            <h1>"Manager Dashboard"</h1>
            <p>"Create tasks and follow your team's progress."</p>
        </main>
    }
}

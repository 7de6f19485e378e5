//! Employee dashboard route. Entry is gated by the navigation guard.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="dashboard dashboard--employee">
            <h1>"Employee Dashboard"</h1>
            <p>"Your assigned tasks and their deadlines."</p>
        </main>
    }
}

//! Admin dashboard route. Entry is gated by the navigation guard.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <NavBar/>
        <main class="dashboard dashboard--admin">
            <h1>"Admin Dashboard"</h1>
            <p>"Approve accounts, assign roles and oversee every task."</p>
        </main>
    }
}

use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::nav_bar::NavBar;
use crate::pages::attendance::AttendancePage;
use crate::pages::settings::SettingsPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=AttendancePage />
                        <Route path=path!("/settings") view=SettingsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

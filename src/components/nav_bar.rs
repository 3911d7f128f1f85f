use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <h1 class="nav-title">"Meet Attendance"</h1>
            <ul class="nav-list">
                <li class="nav-item">
                    <a href="/" class="nav-link">"Check"</a>
                </li>
                <li class="nav-item">
                    <a href="/settings" class="nav-link">"Settings"</a>
                </li>
            </ul>
        </nav>
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::clients::ui::{ClientEditor, ClientList};
use crate::domain::jobs::notifications::NotificationService;
use crate::domain::jobs::ui::{Dashboard, JobDetailsPage, JobEditor};
use crate::layout::Shell;
use crate::system::pages::{AdminPage, LoginPage};

#[component]
pub fn App() -> impl IntoView {
    // Deadline notifications are shared by the sidebar badge and the
    // dashboard alert strip.
    provide_context(NotificationService::new());

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty-state">"Page not found"</p> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/clients") view=ClientList />
                    <Route path=path!("/new-client") view=ClientEditor />
                    <Route path=path!("/client/edit/:id") view=ClientEditor />
                    <Route path=path!("/new") view=JobEditor />
                    <Route path=path!("/job/:id") view=JobDetailsPage />
                    <Route path=path!("/job/edit/:id") view=JobEditor />
                    <Route path=path!("/admin") view=AdminPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </Shell>
        </Router>
    }
}

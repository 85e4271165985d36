use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::pages::{daily::DailyPage, upload::UploadPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app" dir="rtl">
                <Header />
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=UploadPage />
                        <Route path=path!("/daily") view=DailyPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

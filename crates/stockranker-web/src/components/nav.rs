use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"آپلود فایل CSV"</A>
            <A href="/daily" attr:class="nav-tab">"توصیه‌های روزانه"</A>
        </nav>
    }
}

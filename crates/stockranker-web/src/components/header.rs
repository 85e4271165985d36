use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🚀 سامانه رتبه‌بندی و توصیه‌گر سهام"</h1>
            <span class="subtitle">"Stock Ranker"</span>
        </header>
    }
}

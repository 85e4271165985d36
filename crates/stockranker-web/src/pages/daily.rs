use leptos::prelude::*;
use stockranker_core::{format_scaled, format_score, ViewState};

use crate::api;

/// Fetch variant: GET the pre-computed daily recommendations on demand.
#[component]
pub fn DailyPage() -> impl IntoView {
    let (state, set_state) = signal(ViewState::Idle);

    let on_fetch = move |_| {
        set_state.set(ViewState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_recommendations().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&e.to_string().into());
            }
            set_state.set(ViewState::from_recommend(result));
        });
    };

    view! {
        <div class="page daily-page">
            <h2>"توصیه‌های روزانه سهام"</h2>

            <div class="fetch-bar">
                <button
                    class="run-btn"
                    disabled=move || state.with(ViewState::is_loading)
                    on:click=on_fetch
                >
                    {move || if state.with(ViewState::is_loading) {
                        view! { <span class="loading"><span class="spinner"></span>" در حال دریافت..."</span> }.into_any()
                    } else {
                        view! { <span>"دریافت توصیه‌های امروز"</span> }.into_any()
                    }}
                </button>
            </div>

            {move || match state.get() {
                ViewState::Idle => view! {
                    <p class="placeholder">"برای مشاهده توصیه‌های امروز دکمه را بزنید."</p>
                }.into_any(),
                ViewState::Loading => ().into_any(),
                ViewState::Error(msg) => view! {
                    <div class="error-panel" role="alert">
                        <p class="error-title">"❌ خطا"</p>
                        <p>{msg}</p>
                    </div>
                }.into_any(),
                ViewState::Empty(msg) => view! {
                    <div class="notice-panel">
                        <p>{msg}</p>
                    </div>
                }.into_any(),
                ViewState::Loaded(items) => view! {
                    <div class="results-panel">
                        <h3>"🏆 برترین‌های امروز"</h3>
                        <table class="results-table">
                            <thead>
                                <tr>
                                    <th>"ردیف"</th>
                                    <th>"شناسه سهام (ID)"</th>
                                    <th>"امتیاز توصیه‌گر"</th>
                                    <th>"نسبت P/E"</th>
                                    <th>"ارزش بازار"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().enumerate().map(|(idx, item)| view! {
                                    <tr>
                                        <td>{idx + 1}</td>
                                        <td class="ticker">{item.id.clone()}</td>
                                        <td class="score">{format_score(item.score)}</td>
                                        <td>{format_scaled(item.pe_ratio())}</td>
                                        <td>{format_scaled(item.market_cap())}</td>
                                    </tr>
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

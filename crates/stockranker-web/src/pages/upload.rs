use leptos::prelude::*;
use stockranker_core::{messages, ViewState};
use web_sys::HtmlInputElement;

use crate::api;

/// Upload variant: POST a CSV to `/predict` and render the ranked top 10.
#[component]
pub fn UploadPage() -> impl IntoView {
    let (state, set_state) = signal(ViewState::Idle);
    let (file, set_file) = signal_local(None::<web_sys::File>);

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        set_file.set(input.files().and_then(|list| list.get(0)));
        // A new selection discards previous results and errors.
        set_state.set(ViewState::Idle);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(file) = file.get_untracked() else {
            // Local validation only; no request is issued.
            set_state.set(ViewState::Error(messages::NO_FILE_SELECTED.to_string()));
            return;
        };

        set_state.set(ViewState::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::upload_csv(&file).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&e.to_string().into());
            }
            set_state.set(ViewState::from_predict(result));
        });
    };

    view! {
        <div class="page upload-page">
            <h2>"پیش‌بینی بر اساس فایل CSV"</h2>

            <form class="upload-form" on:submit=on_submit>
                <div class="form-group file-field">
                    <input type="file" accept=".csv,text/csv" on:change=on_file_change />
                </div>
                <button
                    class="run-btn"
                    type="submit"
                    disabled=move || state.with(ViewState::is_loading)
                >
                    {move || if state.with(ViewState::is_loading) {
                        view! { <span class="loading"><span class="spinner"></span>" در حال پردازش..."</span> }.into_any()
                    } else {
                        view! { <span>"ارسال برای پیش‌بینی"</span> }.into_any()
                    }}
                </button>
            </form>

            {move || match state.get() {
                ViewState::Idle | ViewState::Loading => ().into_any(),
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
                // An empty top_10 renders the form alone, same as before any upload.
                ViewState::Loaded(items) if items.is_empty() => ().into_any(),
                ViewState::Loaded(items) => view! {
                    <div class="results-panel">
                        <h3>"🏆 نتایج برتر (Top 10)"</h3>
                        <table class="results-table">
                            <thead>
                                <tr>
                                    <th>"ردیف"</th>
                                    <th>"شناسه سهام (ID)"</th>
                                    <th>"امتیاز توصیه‌گر"</th>
                                    <th>"اطلاعات تکمیلی"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.into_iter().enumerate().map(|(idx, item)| view! {
                                    <tr>
                                        <td>{idx + 1}</td>
                                        <td class="ticker">{item.id.clone()}</td>
                                        <td class="score">{item.score.to_string()}</td>
                                        <td>{item.primary_extra_or_dash()}</td>
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

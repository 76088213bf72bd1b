use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page rendered by the router fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">
                "The page you're looking for doesn't exist or may have been moved."
            </p>
            <div class="not-found__actions">
                <button
                    class="btn-primary"
                    on:click=move |_| {
                        navigate("/", Default::default());
                    }
                >
                    "Back to Customers"
                </button>
                <button
                    class="btn-outlined"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "Go Back"
                </button>
            </div>
        </div>
    }
}

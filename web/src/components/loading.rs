use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Full-page branded loading state. Rendered while the first customer data
/// loads; fixed structure, no props.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__content">
                <h1 class="loading-screen__title">"Taller 2001"</h1>
                <Spinner size=SpinnerSize::Huge />
            </div>
        </div>
    }
}

/// In-page loading indicator for view-level `Suspense` fallbacks.
#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading, please wait...".to_string())}
            </p>
        </div>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Taller 2001"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Customers"
                    </A>
                </div>
            </div>
        </nav>
    }
}

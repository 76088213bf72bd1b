use leptos::prelude::*;
use leptos_router::components::A;

use crate::{
    components::{error::ErrorView, loading::LoadingScreen},
    server::get_customers,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let customers_resource = Resource::new(|| (), |_| async move { get_customers().await.ok() });

    view! {
        <div class="customers-page">
            <Suspense fallback=move || view! { <LoadingScreen/> }>
                {move || {
                    customers_resource.get().map(|data| match data {
                        Some(customers) => {
                            view! {
                                <div class="customers-container">
                                    <div class="customers-header">
                                        <h1>"Customers"</h1>
                                        <p class="customers-subtitle">
                                            "Every vehicle currently on the workshop books"
                                        </p>
                                    </div>

                                    <div class="customers-list">
                                        {customers
                                            .into_iter()
                                            .map(|customer| {
                                                view! {
                                                    <A
                                                        href=format!("/customers/{}", customer.id)
                                                        attr:class="customer-row"
                                                    >
                                                        <span class="customer-row__name">{customer.name}</span>
                                                        <span class="customer-row__vehicle">
                                                            {format!("{} ({})", customer.vehicle, customer.vehicle_year)}
                                                        </span>
                                                        <span class="customer-row__phone">{customer.phone}</span>
                                                    </A>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <ErrorView message=Some("Could not load customer records.".to_string()) />
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_params_map;
use serde_json::{Map, Value};
use shared_types::CustomerRecord;
use thaw::*;

use crate::{
    components::{error::ErrorView, loading::LoadingView},
    server::{get_customer, update_customer},
    utils::forms::changed_fields,
};

#[component]
pub fn CustomerEditPage() -> impl IntoView {
    let params = use_params_map();

    let customer_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
            .unwrap_or(0)
    });

    let customer_resource = Resource::new(
        move || customer_id.get(),
        |id| async move {
            if id > 0 {
                get_customer(id).await.ok()
            } else {
                None
            }
        },
    );

    view! {
        <div class="customer-edit-page">
            <Suspense fallback=move || {
                view! { <LoadingView message=Some("Loading customer record...".to_string()) /> }
            }>
                {move || {
                    customer_resource.get().map(|data| match data {
                        Some(record) => view! { <CustomerForm record/> }.into_any(),
                        None => {
                            view! {
                                <ErrorView message=Some("Customer not found.".to_string()) />
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn CustomerForm(record: CustomerRecord) -> impl IntoView {
    // Last server-confirmed state; everything is diffed against this.
    let baseline = RwSignal::new(record.clone());

    let name = RwSignal::new(record.name);
    let email = RwSignal::new(record.email);
    let phone = RwSignal::new(record.phone);
    let vehicle = RwSignal::new(record.vehicle);
    let vehicle_year = RwSignal::new(record.vehicle_year.to_string());
    let notes = RwSignal::new(record.notes);

    let saving = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let success_message = RwSignal::new(Option::<String>::None);

    let submit = move |_| {
        error_message.set(None);
        success_message.set(None);

        let year = match vehicle_year.get().trim().parse::<i32>() {
            Ok(year) => year,
            Err(_) => {
                error_message.set(Some("Vehicle year must be a number.".to_string()));
                return;
            }
        };

        let mut edited = Map::new();
        edited.insert("name".to_string(), Value::from(name.get()));
        edited.insert("email".to_string(), Value::from(email.get()));
        edited.insert("phone".to_string(), Value::from(phone.get()));
        edited.insert("vehicle".to_string(), Value::from(vehicle.get()));
        edited.insert("vehicle_year".to_string(), Value::from(year));
        edited.insert("notes".to_string(), Value::from(notes.get()));

        let original = serde_json::to_value(baseline.get())
            .ok()
            .and_then(|value| value.as_object().cloned());

        // Only ship fields that actually changed.
        let changes = changed_fields(
            original.as_ref(),
            &edited,
            Some(CustomerRecord::EDITABLE_FIELDS),
        );

        if changes.is_empty() {
            success_message.set(Some("Nothing to save.".to_string()));
            return;
        }

        saving.set(true);
        let id = baseline.get().id;

        spawn_local(async move {
            match update_customer(id, changes).await {
                Ok(updated) => {
                    name.set(updated.name.clone());
                    email.set(updated.email.clone());
                    phone.set(updated.phone.clone());
                    vehicle.set(updated.vehicle.clone());
                    vehicle_year.set(updated.vehicle_year.to_string());
                    notes.set(updated.notes.clone());
                    baseline.set(updated);
                    success_message.set(Some("Changes saved.".to_string()));
                }
                Err(e) => {
                    error_message.set(Some(format!("Failed to save changes: {}", e)));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="customer-form">
            <h1 class="customer-form__title">{move || baseline.get().name}</h1>
            <p class="customer-form__subtitle">
                {move || {
                    let record = baseline.get();
                    format!("{} ({})", record.vehicle, record.vehicle_year)
                }}
            </p>

            {move || {
                error_message
                    .get()
                    .map(|msg| view! { <ErrorView message=Some(msg) /> })
            }}
            {move || {
                success_message
                    .get()
                    .map(|msg| {
                        view! { <MessageBar intent=MessageBarIntent::Success>{msg}</MessageBar> }
                    })
            }}

            <form on:submit=move |ev| {
                ev.prevent_default();
                submit(());
            }>
                <div class="form-group">
                    <label for="customer-name">"Name"</label>
                    <Input id="customer-name" placeholder="Full name" value=name />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="customer-email">"Email"</label>
                        <Input
                            id="customer-email"
                            placeholder="Email address"
                            input_type=InputType::Email
                            value=email
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer-phone">"Phone"</label>
                        <Input
                            id="customer-phone"
                            placeholder="Phone number"
                            input_type=InputType::Tel
                            value=phone
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="customer-vehicle">"Vehicle"</label>
                        <Input
                            id="customer-vehicle"
                            placeholder="e.g., Fiat Duna"
                            value=vehicle
                        />
                    </div>
                    <div class="form-group">
                        <label for="customer-vehicle-year">"Vehicle Year"</label>
                        <Input
                            id="customer-vehicle-year"
                            placeholder="e.g., 1994"
                            value=vehicle_year
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="customer-notes">"Notes"</label>
                    <Textarea
                        id="customer-notes"
                        placeholder="Service notes..."
                        value=notes
                    />
                </div>

                <Button
                    class="customer-form__save"
                    button_type=ButtonType::Submit
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(saving)
                >
                    "Save Changes"
                </Button>
            </form>
        </div>
    }
}

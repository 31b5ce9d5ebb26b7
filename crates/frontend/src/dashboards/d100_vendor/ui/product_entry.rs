use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use crate::shared::reducer::apply;
use contracts::dashboards::d100_vendor::product_entry::{self, Event, Message};
use contracts::domain::a006_product_entry::ProductEntryDraft;
use leptos::prelude::*;
use thaw::Card;

fn log_event(event: Event) {
    match event {
        Event::None => {}
        // QR-код не генерируется, только запись в журнал
        Event::Submitted(draft) => log::info!(
            "Product entry submitted: {}",
            draft.to_log_json()
        ),
        Event::DraftSaved(draft) => log::info!(
            "Product entry draft saved: {}",
            draft.to_log_json()
        ),
    }
}

/// "New Product Entry" form
#[component]
pub fn ProductEntryForm(draft: RwSignal<ProductEntryDraft>) -> impl IntoView {
    let send = move |message: Message| {
        log_event(apply(draft, |d| product_entry::update(d, message)));
    };
    let field = move |get: fn(&ProductEntryDraft) -> String| {
        Signal::derive(move || draft.with(get))
    };

    view! {
        <div class="narrow">
            <Card>
                <div class="card__header">
                    <h2 class="card__title accent-text--vendor">"New Product Entry"</h2>
                    <p class="card__description">
                        "Enter track fitting details to generate QR codes and batch records"
                    </p>
                </div>

                <div class="form-grid">
                    <Input
                        id="lotNo"
                        label="Lot Number"
                        placeholder="LOT-2024-001"
                        value=field(|d| d.lot_number.clone())
                        on_input=Callback::new(move |v| send(Message::LotNumberChanged(v)))
                    />
                    <Input
                        id="productType"
                        label="Product Type"
                        placeholder="Track Clips"
                        value=field(|d| d.product_type.clone())
                        on_input=Callback::new(move |v| send(Message::ProductTypeChanged(v)))
                    />
                    <Input
                        id="quantity"
                        label="Quantity"
                        input_type="number"
                        placeholder="500"
                        value=field(|d| d.quantity.clone())
                        on_input=Callback::new(move |v| send(Message::QuantityChanged(v)))
                    />
                    <Input
                        id="mfgDate"
                        label="Manufacturing Date"
                        input_type="date"
                        value=field(|d| d.mfg_date.clone())
                        on_input=Callback::new(move |v| send(Message::MfgDateChanged(v)))
                    />
                    <Input
                        id="warrantyPeriod"
                        label="Warranty Period (Years)"
                        input_type="number"
                        placeholder="5"
                        value=field(|d| d.warranty_years.clone())
                        on_input=Callback::new(move |v| send(Message::WarrantyYearsChanged(v)))
                    />
                    <Input
                        id="vendorId"
                        label="Vendor ID"
                        value=field(|d| d.vendor_id.to_string())
                        disabled=true
                    />
                </div>

                <Textarea
                    id="specifications"
                    label="Product Specifications"
                    placeholder="Enter detailed product specifications, materials, and compliance standards..."
                    rows=3
                    value=field(|d| d.specifications.clone())
                    on_input=Callback::new(move |v| send(Message::SpecificationsChanged(v)))
                />

                <div class="actions">
                    <Button
                        class="actions__grow accent--vendor"
                        disabled=Signal::derive(move || !draft.with(|d| d.is_submittable()))
                        on_click=Callback::new(move |_| send(Message::Submit))
                    >
                        {icon("qr-code")}
                        "Generate QR & Submit"
                    </Button>
                    <Button
                        variant="outline"
                        on_click=Callback::new(move |_| send(Message::SaveDraft))
                    >
                        {icon("file-text")}
                        "Save Draft"
                    </Button>
                </div>
            </Card>
        </div>
    }
}

use crate::shared::components::ui::{Button, Textarea};
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::reducer::apply;
use crate::shared::tone::Tone;
use chrono::{NaiveDate, Utc};
use contracts::dashboards::d200_inspector::scanner::{self, Event, Message};
use contracts::dashboards::d200_inspector::ScannerState;
use contracts::domain::a003_scanned_item::ScannedItem;
use contracts::enums::InspectionResult;
use leptos::prelude::*;
use thaw::Card;

fn log_event(event: Event) {
    match event {
        Event::None => {}
        Event::Scanned(item) => log::info!("QR scanned (simulated): lot {}", item.lot_number),
        // отправка ничего не сохраняет
        Event::Submitted(submission) => log::info!(
            "Inspection submitted: {}",
            submission.to_log_json()
        ),
        Event::Cancelled => log::info!("Inspection cancelled"),
    }
}

/// Variant of a result button: filled when chosen, outline otherwise
pub fn result_button_variant(result: InspectionResult, selected: Option<InspectionResult>) -> &'static str {
    match (selected == Some(result), result) {
        (true, InspectionResult::Pass) => "success",
        (true, InspectionResult::Fail) => "destructive",
        (false, _) => "outline",
    }
}

/// Tone of the "Warranty Until" value: fail once the warranty has run out
pub fn warranty_tone(item: &ScannedItem, today: NaiveDate) -> Tone {
    if item.is_warranty_expired(today) {
        Tone::Fail
    } else {
        Tone::Pass
    }
}

/// QR scanner tab: idle camera placeholder or the review of a scanned item
#[component]
pub fn Scanner(state: RwSignal<ScannerState>) -> impl IntoView {
    let send = Callback::new(move |message: Message| {
        log_event(apply(state, |s| scanner::update(s, message)));
    });
    // меняется только при переходе сканирование <-> ожидание, а не на каждый ввод
    let scanned = Memo::new(move |_| state.with(|s| s.review().map(|r| r.item.clone())));

    view! {
        <div class="narrow">
            {move || match scanned.get() {
                None => view! {
                    <Card class="scanner">
                        <div class="card__header card__header--center">
                            <h2 class="card__title accent-text--inspector">"Scan QR Code"</h2>
                            <p class="card__description">
                                "Position the QR code within the camera frame to scan track fitting details"
                            </p>
                        </div>
                        <div class="scanner__frame">{icon("camera")}</div>
                        <Button
                            size="lg"
                            class="accent--inspector"
                            on_click=Callback::new(move |_| send.run(Message::Scan))
                        >
                            {icon("qr-code")}
                            "Activate QR Scanner"
                        </Button>
                    </Card>
                }
                .into_any(),
                Some(item) => view! {
                    <ReviewPanel
                        item=item
                        send=send
                        can_submit=Signal::derive(move || state.with(|s| s.can_submit()))
                        selected=Signal::derive(move || state.with(|s| s.selected_result()))
                        remarks=Signal::derive(move || {
                            state.with(|s| s.review().map(|r| r.remarks.clone()).unwrap_or_default())
                        })
                    />
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ReviewPanel(
    item: ScannedItem,
    send: Callback<Message>,
    can_submit: Signal<bool>,
    selected: Signal<Option<InspectionResult>>,
    remarks: Signal<String>,
) -> impl IntoView {
    let expires = format_optional_date(item.warranty_expires_on());
    let expires_tone = warranty_tone(&item, Utc::now().date_naive());

    let result_button = move |result: InspectionResult| {
        let icon_name = if result.is_pass() { "check-circle" } else { "x-circle" };
        view! {
            <Button
                variant=Signal::derive(move || result_button_variant(result, selected.get()).to_string())
                on_click=Callback::new(move |_| send.run(Message::ChooseResult(result)))
            >
                {icon(icon_name)}
                {result.display_name()}
            </Button>
        }
    };

    view! {
        <div class="stack">
            <Card>
                <div class="card__header">
                    <h2 class="card__title accent-text--inspector">"Scanned Item Details"</h2>
                    <p class="card__description">"Review product information and conduct inspection"</p>
                </div>
                <div class="details-grid">
                    <Detail label="Lot Number" value=item.lot_number.to_string() />
                    <Detail label="Vendor ID" value=item.vendor_id.to_string() />
                    <Detail label="Product" value=item.product.clone() />
                    <Detail label="Manufacturing Date" value=format_date(item.mfg_date) />
                    <Detail label="Warranty Period" value=item.warranty_period.to_string() />
                    <Detail label="Warranty Until" value=expires tone=expires_tone />
                </div>
                <div>
                    <p class="details__label">"Specifications"</p>
                    <p class="details__text">{item.specifications.clone()}</p>
                </div>
            </Card>

            <Card>
                <div class="card__header">
                    <h2 class="card__title">"Inspection Report"</h2>
                    <p class="card__description">"Submit your inspection results"</p>
                </div>
                <p class="details__label">"Inspection Result"</p>
                <div class="actions">
                    {result_button(InspectionResult::Pass)}
                    {result_button(InspectionResult::Fail)}
                </div>

                <Textarea
                    id="remarks"
                    label="Remarks (Optional)"
                    placeholder="Enter inspection notes, observations, or issues found..."
                    rows=3
                    value=remarks
                    on_input=Callback::new(move |v| send.run(Message::RemarksChanged(v)))
                />

                <div class="actions">
                    <Button
                        class="actions__grow accent--inspector"
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=Callback::new(move |_| send.run(Message::Submit))
                    >
                        "Submit Inspection"
                    </Button>
                    <Button
                        variant="outline"
                        on_click=Callback::new(move |_| send.run(Message::Cancel))
                    >
                        "Cancel"
                    </Button>
                </div>
            </Card>
        </div>
    }
}

#[component]
fn Detail(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] tone: Option<Tone>,
) -> impl IntoView {
    let value_class = match tone {
        Some(tone) => format!("details__value details__value--{}", tone.modifier()),
        None => "details__value".to_string(),
    };

    view! {
        <div>
            <p class="details__label">{label}</p>
            <p class=value_class>{value}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_button_variant() {
        use InspectionResult::*;
        assert_eq!(result_button_variant(Pass, None), "outline");
        assert_eq!(result_button_variant(Pass, Some(Pass)), "success");
        assert_eq!(result_button_variant(Fail, Some(Fail)), "destructive");
        assert_eq!(result_button_variant(Fail, Some(Pass)), "outline");
    }

    #[test]
    fn test_warranty_tone() {
        let item = contracts::shared::sample_data::simulated_scan();
        let expires = NaiveDate::from_ymd_opt(2029, 1, 10).unwrap();
        assert_eq!(warranty_tone(&item, expires), Tone::Pass);
        assert_eq!(warranty_tone(&item, expires.succ_opt().unwrap()), Tone::Fail);
    }
}

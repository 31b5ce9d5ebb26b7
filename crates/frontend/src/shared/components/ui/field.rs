use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn FieldLabel(for_id: &'static str, text: &'static str, icon_name: Option<&'static str>) -> impl IntoView {
    view! {
        <label class="form__label" for=for_id>
            {icon_name.map(icon)}
            {text}
        </label>
    }
}

fn emit(handler: Option<Callback<String>>, ev: &leptos::ev::Event) {
    if let Some(handler) = handler {
        handler.run(event_target_value(ev));
    }
}

/// Labelled single-line input bound to a string signal.
///
/// Without `on_input` the field only mirrors `value`.
#[component]
pub fn Input(
    id: &'static str,
    label: &'static str,
    /// Icon name shown before the label
    #[prop(optional)]
    label_icon: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] placeholder: &'static str,
    /// "text" (default), "password", "number", "date"
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <FieldLabel for_id=id text=label icon_name=label_icon />
            <input
                id=id
                name=id
                class="form__input"
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                disabled=disabled
                prop:value=move || value.get()
                on:input=move |ev| emit(on_input, &ev)
            />
        </div>
    }
}

/// Labelled multi-line input bound to a string signal
#[component]
pub fn Textarea(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <FieldLabel for_id=id text=label icon_name=None />
            <textarea
                id=id
                name=id
                class="form__textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| emit(on_input, &ev)
            ></textarea>
        </div>
    }
}

use leptos::prelude::*;

/// CSS classes for a button variant. Unknown variants fall back to primary.
pub fn variant_class(variant: &str) -> &'static str {
    match variant {
        "outline" => "button--outline",
        "ghost" => "button--ghost",
        "destructive" => "button--destructive",
        "success" => "button--success",
        _ => "button--primary",
    }
}

pub fn size_class(size: &str) -> &'static str {
    match size {
        "sm" => "button--small",
        "lg" => "button--large",
        _ => "",
    }
}

/// Button component with variants (primary, outline, ghost, destructive, success) and sizes (sm, md, lg)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline", "ghost", "destructive" or "success"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default), "sm" or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_css = move || variant_class(variant.get().as_deref().unwrap_or("primary"));
    let size_css = move || size_class(size.get().as_deref().unwrap_or("md"));
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_css(), size_css(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_class() {
        assert_eq!(variant_class("outline"), "button--outline");
        assert_eq!(variant_class("destructive"), "button--destructive");
        assert_eq!(variant_class("unknown"), "button--primary");
    }

    #[test]
    fn test_size_class() {
        assert_eq!(size_class("sm"), "button--small");
        assert_eq!(size_class("lg"), "button--large");
        assert_eq!(size_class("md"), "");
    }
}

use super::field::{control_class, FormField};
use leptos::prelude::*;

/// Text input inside a labelled form group
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    /// Receives the new text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "password", "email", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] autocomplete: MaybeProp<String>,
    /// Validation message; also marks the control invalid
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
) -> impl IntoView {
    let control_id = Signal::derive(move || id.get().unwrap_or_default());
    let classes = move || {
        control_class(
            "form__input",
            error.with(Option::is_some),
            class.get().as_deref(),
        )
    };

    view! {
        <FormField label=label control_id=control_id error=error>
            <input
                id=move || control_id.get()
                class=classes
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get()
                autocomplete=move || autocomplete.get()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </FormField>
    }
}

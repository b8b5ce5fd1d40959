use super::field::{control_class, FormField};
use leptos::prelude::*;

const DEFAULT_ROWS: u32 = 3;

/// Multi-line text input inside a labelled form group
#[component]
pub fn Textarea(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let control_id = Signal::derive(move || id.get().unwrap_or_default());
    let classes = move || control_class("form__textarea", error.with(Option::is_some), None);

    view! {
        <FormField label=label control_id=control_id error=error>
            // text content would only set the initial value; prop:value keeps it in sync
            <textarea
                id=move || control_id.get()
                class=classes
                rows=rows.unwrap_or(DEFAULT_ROWS)
                placeholder=move || placeholder.get()
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </FormField>
    }
}

use super::field::{control_class, FormField};
use leptos::prelude::*;

/// Dropdown over `(value, label)` pairs inside a labelled form group
#[component]
pub fn Select(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Currently selected value; empty selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Empty first option, e.g. "Seleccione una categoría"
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] id: MaybeProp<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
) -> impl IntoView {
    let control_id = Signal::derive(move || id.get().unwrap_or_default());
    let classes = move || control_class("form__select", error.with(Option::is_some), None);

    view! {
        <FormField label=label control_id=control_id error=error>
            <select
                id=move || control_id.get()
                class=classes
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || placeholder.get().map(|text| {
                    view! { <option value="" selected=move || value.with(String::is_empty)>{text}</option> }
                })}
                <For
                    each=move || options.get()
                    key=|(option_value, _)| option_value.clone()
                    children=move |(option_value, text)| {
                        let selected = {
                            let option_value = option_value.clone();
                            move || value.with(|v| *v == option_value)
                        };
                        view! { <option value=option_value selected=selected>{text}</option> }
                    }
                />
            </select>
        </FormField>
    }
}

/// Select value for an optional id; the empty option stands for `None`
pub fn id_to_value(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

pub fn value_to_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

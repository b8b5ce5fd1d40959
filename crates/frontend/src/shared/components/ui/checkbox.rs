use leptos::prelude::*;

/// Checkbox with its label wrapped around it
#[component]
pub fn Checkbox(
    #[prop(into)] label: Signal<String>,
    #[prop(into)] checked: Signal<bool>,
    /// Receives the new checked state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <label class="form__checkbox" class:form__checkbox--disabled=is_disabled>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="form__checkbox-label">{move || label.get()}</span>
        </label>
    }
}

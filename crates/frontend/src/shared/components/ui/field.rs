use leptos::prelude::*;

/// Class list of a form control, marking it invalid while it has an error
pub fn control_class(base: &str, invalid: bool, extra: Option<&str>) -> String {
    let mut class = base.to_string();
    if invalid {
        class.push(' ');
        class.push_str(base);
        class.push_str("--invalid");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Inline validation message under a form control
#[component]
pub fn FieldError(#[prop(into)] message: MaybeProp<String>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! { <p class="form__error">{m}</p> })}
    }
}

/// Label, control and validation message laid out as one form group
#[component]
pub fn FormField(
    #[prop(into)] label: MaybeProp<String>,
    /// Id of the labelled control
    #[prop(into)]
    control_id: Signal<String>,
    #[prop(into)] error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label" for=move || control_id.get()>{l}</label> })}
            {children()}
            <FieldError message=error />
        </div>
    }
}

use contracts::domain::a002_unit_of_measure::aggregate::UnitOfMeasure;
use leptos::prelude::*;

use crate::shared::components::ui::Input;
use crate::shared::resource_form::ResourceForm;

#[component]
pub fn UnitFormFields(form: ResourceForm<UnitOfMeasure>) -> impl IntoView {
    let values = form.form;

    view! {
        <Input
            label="Nombre"
            id="unit-name"
            placeholder="Kilogramo"
            value=Signal::derive(move || values.with(|f| f.name.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.name = v))
            error=form.field_error("name")
        />
        <Input
            label="Abreviatura"
            id="unit-abbreviation"
            placeholder="kg"
            value=Signal::derive(move || values.with(|f| f.abbreviation.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.abbreviation = v))
            error=form.field_error("abbreviation")
        />
    }
}

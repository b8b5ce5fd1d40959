use contracts::domain::a001_product_category::aggregate::ProductCategory;
use leptos::prelude::*;

use crate::shared::components::ui::{Input, Textarea};
use crate::shared::resource_form::ResourceForm;

/// Поля формы категории
#[component]
pub fn CategoryFormFields(form: ResourceForm<ProductCategory>) -> impl IntoView {
    let values = form.form;

    view! {
        <Input
            label="Nombre"
            id="category-name"
            placeholder="Frutas"
            value=Signal::derive(move || values.with(|f| f.name.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.name = v))
            error=form.field_error("name")
        />
        <Textarea
            label="Descripción"
            id="category-description"
            placeholder="Descripción de la categoría"
            value=Signal::derive(move || values.with(|f| f.description.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.description = v))
            error=form.field_error("description")
        />
    }
}

use contracts::domain::a001_product_category::aggregate::ProductCategory;
use contracts::domain::a002_unit_of_measure::aggregate::UnitOfMeasure;
use contracts::domain::a003_predefined_product::aggregate::PredefinedProduct;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::shared::components::ui::select::{id_to_value, value_to_id};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::fetch::use_fetch;
use crate::shared::resource_form::ResourceForm;

/// Поля формы "Producto Padre": категория обязательна, единица измерения опциональна
#[component]
pub fn PredefinedProductFormFields(form: ResourceForm<PredefinedProduct>) -> impl IntoView {
    let values = form.form;
    let categories = use_fetch::<Vec<ProductCategory>>(ProductCategory::collection_path().to_string());
    let units = use_fetch::<Vec<UnitOfMeasure>>(UnitOfMeasure::collection_path().to_string());

    let category_options = Signal::derive(move || {
        categories.data.with(|data| {
            data.iter()
                .flatten()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let unit_options = Signal::derive(move || {
        units.data.with(|data| {
            data.iter()
                .flatten()
                .map(|u| (u.id.to_string(), format!("{} ({})", u.name, u.abbreviation)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Input
            label="Nombre"
            id="predefined-name"
            value=Signal::derive(move || values.with(|f| f.name.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.name = v))
            error=form.field_error("name")
        />
        <Textarea
            label="Descripción"
            id="predefined-description"
            value=Signal::derive(move || values.with(|f| f.description.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.description = v))
            error=form.field_error("description")
        />
        <Select
            label="Categoría"
            id="predefined-category"
            placeholder="Seleccione una categoría"
            options=category_options
            value=Signal::derive(move || values.with(|f| id_to_value(f.category_id)))
            on_change=Callback::new(move |v: String| values.update(|f| f.category_id = value_to_id(&v)))
            disabled=categories.loading
            error=form.field_error("category_id")
        />
        <Select
            label="Unidad de medida"
            id="predefined-unit"
            placeholder="Sin unidad"
            options=unit_options
            value=Signal::derive(move || values.with(|f| id_to_value(f.unit_id)))
            on_change=Callback::new(move |v: String| values.update(|f| f.unit_id = value_to_id(&v)))
            disabled=units.loading
        />
    }
}

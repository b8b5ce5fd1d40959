use contracts::domain::a003_predefined_product::aggregate::PredefinedProduct;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::shared::components::ui::select::{id_to_value, value_to_id};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::fetch::use_fetch;
use crate::shared::resource_form::ResourceForm;

#[component]
pub fn ProductFormFields(form: ResourceForm<Product>) -> impl IntoView {
    let values = form.form;
    let parents = use_fetch::<Vec<PredefinedProduct>>(PredefinedProduct::collection_path().to_string());
    let parent_options = Signal::derive(move || {
        parents.data.with(|data| {
            data.iter()
                .flatten()
                .map(|p| (p.id.to_string(), format!("{} · {}", p.name, p.category.name)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Select
            label="Producto padre"
            id="product-parent"
            placeholder="Seleccione un producto padre"
            options=parent_options
            value=Signal::derive(move || values.with(|f| id_to_value(f.predefined_product_id)))
            on_change=Callback::new(move |v: String| {
                values.update(|f| f.predefined_product_id = value_to_id(&v))
            })
            disabled=parents.loading
            error=form.field_error("predefined_product_id")
        />
        <Textarea
            label="Descripción"
            id="product-description"
            value=Signal::derive(move || values.with(|f| f.description.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.description = v))
            error=form.field_error("description")
        />
        <Input
            label="Imagen (URL)"
            id="product-image"
            input_type="url"
            placeholder="https://"
            value=Signal::derive(move || values.with(|f| f.image.clone()))
            on_input=Callback::new(move |v| values.update(|f| f.image = v))
            error=form.field_error("image")
        />
        <div class="form__row">
            <Input
                label="Precio"
                id="product-price"
                placeholder="0.00"
                value=Signal::derive(move || values.with(|f| f.price.clone()))
                on_input=Callback::new(move |v| values.update(|f| f.price = v))
                error=form.field_error("price")
            />
            <Input
                label="Stock"
                id="product-stock"
                input_type="number"
                placeholder="0"
                value=Signal::derive(move || values.with(|f| f.stock.clone()))
                on_input=Callback::new(move |v| values.update(|f| f.stock = v))
                error=form.field_error("stock")
            />
        </div>
    }
}

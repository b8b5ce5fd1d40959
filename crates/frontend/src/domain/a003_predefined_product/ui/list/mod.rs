use contracts::domain::a003_predefined_product::aggregate::PredefinedProduct;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use super::details::PredefinedProductFormFields;
use crate::shared::api::use_api;
use crate::shared::components::table::{row_actions, ColumnDef, DataTable};
use crate::shared::confirm_dialog::{confirm_delete, use_confirm_dialog};
use crate::shared::fetch::use_resource_rows;
use crate::shared::modal::ResourceModal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_form::ResourceForm;

fn unit_label(p: &PredefinedProduct) -> String {
    p.unit
        .as_ref()
        .map(|u| u.abbreviation.clone())
        .unwrap_or_else(|| "-".to_string())
}

/// Административная страница "Producto Padre"
#[component]
pub fn PredefinedProductsPage() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let dialog = use_confirm_dialog();

    let (rows, fetch) = use_resource_rows::<Vec<PredefinedProduct>, PredefinedProduct>(
        PredefinedProduct::collection_path().to_string(),
        |list| list,
    );
    let form = ResourceForm::<PredefinedProduct>::new();

    let on_edit = Callback::new(move |product: PredefinedProduct| form.open_update(product));
    let on_delete = Callback::new(move |product: PredefinedProduct| {
        confirm_delete::<PredefinedProduct>(
            dialog,
            client.get_value(),
            notifications,
            rows,
            product.id,
            format!(
                "¿Eliminar el producto padre \"{}\"? Esta acción no se puede deshacer",
                product.name
            ),
            PredefinedProduct::deleted_message(),
        )
    });

    let columns = vec![
        ColumnDef::new("name", "Nombre", |p: &PredefinedProduct| p.name.clone()).sortable(),
        ColumnDef::new("description", "Descripción", |p: &PredefinedProduct| p.description.clone())
            .sortable(),
        ColumnDef::new("category", "Categoría", |p: &PredefinedProduct| p.category.name.clone())
            .sortable(),
        ColumnDef::new("unit", "Unidad", unit_label).sortable(),
        row_actions(on_edit, on_delete),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Productos Padre"</h1>
            </div>
            <div class="page__content">
                <DataTable
                    columns=columns
                    rows=rows
                    loading=fetch.loading
                    create_label="Nuevo producto padre"
                    on_create=Callback::new(move |_| form.open_create())
                />
            </div>
            <ResourceModal
                form=form
                on_submit=Callback::new(move |_| form.submit_into(client.get_value(), notifications, rows))
            >
                <PredefinedProductFormFields form=form />
            </ResourceModal>
        </div>
    }
}

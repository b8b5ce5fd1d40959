use contracts::domain::a001_product_category::aggregate::ProductCategory;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use super::details::CategoryFormFields;
use crate::shared::api::use_api;
use crate::shared::components::table::{row_actions, ColumnDef, DataTable};
use crate::shared::components::ui::Badge;
use crate::shared::components::ui::badge::status_variant;
use crate::shared::confirm_dialog::{confirm_delete, use_confirm_dialog};
use crate::shared::fetch::use_resource_rows;
use crate::shared::modal::ResourceModal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_form::ResourceForm;

fn columns(
    on_edit: Callback<ProductCategory>,
    on_delete: Callback<ProductCategory>,
) -> Vec<ColumnDef<ProductCategory>> {
    vec![
        ColumnDef::new("name", "Nombre", |c: &ProductCategory| c.name.clone()).sortable(),
        ColumnDef::new("description", "Descripción", |c: &ProductCategory| c.description.clone())
            .sortable(),
        ColumnDef::new("status", "Estado", |c: &ProductCategory| c.status.clone())
            .sortable()
            .cell(|c: &ProductCategory| {
                let status = c.status.clone();
                view! { <Badge variant=status_variant(&status)>{status.clone()}</Badge> }.into_any()
            }),
        row_actions(on_edit, on_delete),
    ]
}

/// Административная страница категорий
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let dialog = use_confirm_dialog();

    let (rows, fetch) = use_resource_rows::<Vec<ProductCategory>, ProductCategory>(
        ProductCategory::collection_path().to_string(),
        |list| list,
    );
    let form = ResourceForm::<ProductCategory>::new();

    let on_edit = Callback::new(move |category: ProductCategory| form.open_update(category));
    let on_delete = Callback::new(move |category: ProductCategory| {
        confirm_delete::<ProductCategory>(
            dialog,
            client.get_value(),
            notifications,
            rows,
            category.id,
            format!(
                "¿Estás seguro que deseas eliminar la categoría \"{}\"? Esta acción no se puede deshacer",
                category.name
            ),
            ProductCategory::deleted_message(),
        )
    });
    let on_submit = Callback::new(move |_| form.submit_into(client.get_value(), notifications, rows));

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{ProductCategory::list_name()}</h1>
            </div>
            <div class="page__content">
                <DataTable
                    columns=columns(on_edit, on_delete)
                    rows=rows
                    loading=fetch.loading
                    create_label="Nueva categoría"
                    on_create=Callback::new(move |_| form.open_create())
                />
            </div>
            <ResourceModal form=form on_submit=on_submit>
                <CategoryFormFields form=form />
            </ResourceModal>
        </div>
    }
}

use contracts::domain::a002_unit_of_measure::aggregate::UnitOfMeasure;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use super::details::UnitFormFields;
use crate::shared::api::use_api;
use crate::shared::components::table::{row_actions, ColumnDef, DataTable};
use crate::shared::confirm_dialog::{confirm_delete, use_confirm_dialog};
use crate::shared::fetch::use_resource_rows;
use crate::shared::modal::ResourceModal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_form::ResourceForm;

/// Административная страница единиц измерения
#[component]
pub fn UnitsPage() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let dialog = use_confirm_dialog();

    let (rows, fetch) = use_resource_rows::<Vec<UnitOfMeasure>, UnitOfMeasure>(
        UnitOfMeasure::collection_path().to_string(),
        |list| list,
    );
    let form = ResourceForm::<UnitOfMeasure>::new();

    let on_edit = Callback::new(move |unit: UnitOfMeasure| form.open_update(unit));
    let on_delete = Callback::new(move |unit: UnitOfMeasure| {
        confirm_delete::<UnitOfMeasure>(
            dialog,
            client.get_value(),
            notifications,
            rows,
            unit.id,
            format!("¿Eliminar la unidad \"{}\"? Esta acción no se puede deshacer", unit.name),
            UnitOfMeasure::deleted_message(),
        )
    });

    let columns = vec![
        ColumnDef::new("name", "Nombre", |u: &UnitOfMeasure| u.name.clone()).sortable(),
        ColumnDef::new("abbreviation", "Abreviatura", |u: &UnitOfMeasure| u.abbreviation.clone())
            .sortable(),
        ColumnDef::new("status", "Estado", |u: &UnitOfMeasure| u.status.clone()).sortable(),
        row_actions(on_edit, on_delete),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Unidades de Medida"</h1>
            </div>
            <div class="page__content">
                <DataTable
                    columns=columns
                    rows=rows
                    loading=fetch.loading
                    create_label="Nueva unidad"
                    on_create=Callback::new(move |_| form.open_create())
                />
            </div>
            <ResourceModal
                form=form
                on_submit=Callback::new(move |_| form.submit_into(client.get_value(), notifications, rows))
            >
                <UnitFormFields form=form />
            </ResourceModal>
        </div>
    }
}

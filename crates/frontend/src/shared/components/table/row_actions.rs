use super::ColumnDef;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Acciones" column with edit and delete buttons
pub fn row_actions<T>(on_edit: Callback<T>, on_delete: Callback<T>) -> ColumnDef<T>
where
    T: Clone + Send + Sync + 'static,
{
    ColumnDef::actions("actions", "Acciones", move |row: &T| {
        let for_edit = row.clone();
        let for_delete = row.clone();
        view! {
            <div class="table__actions">
                <button
                    class="button button--ghost button--icon"
                    title="Editar"
                    on:click=move |_| on_edit.run(for_edit.clone())
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--ghost button--icon button--danger-text"
                    title="Eliminar"
                    on:click=move |_| on_delete.run(for_delete.clone())
                >
                    {icon("trash")}
                </button>
            </div>
        }
        .into_any()
    })
}

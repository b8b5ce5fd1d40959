use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use leptos::prelude::*;

use super::details::UserFormFields;
use crate::shared::api::use_api;
use crate::shared::components::table::{row_actions, ColumnDef, DataTable};
use crate::shared::confirm_dialog::{confirm_delete, use_confirm_dialog};
use crate::shared::fetch::use_resource_rows;
use crate::shared::modal::ResourceModal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_form::ResourceForm;

/// Административная страница пользователей
#[component]
pub fn UsersPage() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let dialog = use_confirm_dialog();

    let (rows, fetch) =
        use_resource_rows::<Vec<User>, User>(User::collection_path().to_string(), |list| list);
    let form = ResourceForm::<User>::new();

    let on_edit = Callback::new(move |user: User| form.open_update(user));
    let on_delete = Callback::new(move |user: User| {
        confirm_delete::<User>(
            dialog,
            client.get_value(),
            notifications,
            rows,
            user.id,
            format!(
                "¿Eliminar al usuario {} ({})? Esta acción no se puede deshacer",
                user.full_name(),
                user.email
            ),
            User::deleted_message(),
        )
    });

    let columns = vec![
        ColumnDef::new("name", "Nombre", User::full_name).sortable(),
        ColumnDef::new("email", "Correo", |u: &User| u.email.clone()).sortable(),
        ColumnDef::new("roles", "Roles", User::role_labels).sortable(),
        row_actions(on_edit, on_delete),
    ];

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{User::list_name()}</h1>
            </div>
            <div class="page__content">
                <DataTable
                    columns=columns
                    rows=rows
                    loading=fetch.loading
                    create_label="Nuevo usuario"
                    on_create=Callback::new(move |_| form.open_create())
                />
            </div>
            <ResourceModal
                form=form
                on_submit=Callback::new(move |_| form.submit_into(client.get_value(), notifications, rows))
            >
                <UserFormFields form=form />
            </ResourceModal>
        </div>
    }
}

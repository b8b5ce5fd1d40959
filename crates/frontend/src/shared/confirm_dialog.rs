//! Application-wide confirmation dialog for destructive actions.
//!
//! Only one confirmation can be visible; [`ConfirmDialogController::request`]
//! replaces whatever was configured before.

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::list_cache;
use crate::shared::notifications::Notifications;
use contracts::domain::common::AggregateRoot;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// What the caller asks to confirm
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub description: String,
    pub accept_text: String,
    pub cancel_text: String,
    pub on_accept: Option<Callback<()>>,
}

impl ConfirmRequest {
    /// Standard "are you sure" request for deleting something
    pub fn delete(description: impl Into<String>) -> Self {
        Self {
            title: "¿Estás seguro?".to_string(),
            description: description.into(),
            accept_text: "Eliminar".to_string(),
            cancel_text: "Cancelar".to_string(),
            on_accept: None,
        }
    }

    pub fn on_accept(mut self, callback: Callback<()>) -> Self {
        self.on_accept = Some(callback);
        self
    }
}

/// Current dialog configuration
#[derive(Clone, Default)]
pub struct DialogOptions {
    pub open: bool,
    pub title: String,
    pub description: String,
    pub accept_text: String,
    pub cancel_text: String,
    pub is_loading: bool,
    pub on_accept: Option<Callback<()>>,
}

impl From<ConfirmRequest> for DialogOptions {
    fn from(request: ConfirmRequest) -> Self {
        Self {
            open: true,
            title: request.title,
            description: request.description,
            accept_text: request.accept_text,
            cancel_text: request.cancel_text,
            is_loading: false,
            on_accept: request.on_accept,
        }
    }
}

impl DialogOptions {
    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Closed and idle; the rest of the configuration is kept for the
    /// closing animation.
    pub fn closed(mut self) -> Self {
        self.open = false;
        self.is_loading = false;
        self
    }

    pub fn can_accept(&self) -> bool {
        self.open && !self.is_loading
    }
}

/// Single writer for the dialog slot; provided through context
#[derive(Clone, Copy)]
pub struct ConfirmDialogController {
    options: RwSignal<DialogOptions>,
}

impl ConfirmDialogController {
    pub fn new() -> Self {
        Self {
            options: RwSignal::new(DialogOptions::default()),
        }
    }

    pub fn request(&self, request: ConfirmRequest) {
        self.options.set(DialogOptions::from(request));
    }

    pub fn set_loading(&self, is_loading: bool) {
        self.options.update(|o| o.is_loading = is_loading);
    }

    pub fn close(&self) {
        self.options.update(|o| *o = std::mem::take(o).closed());
    }

    pub fn cancel(&self) {
        if self.options.with_untracked(|o| o.is_loading) {
            return;
        }
        self.options.update(|o| o.open = false);
    }

    /// Runs the accept callback unless a previous accept is still loading
    pub fn accept(&self) {
        let callback = self
            .options
            .with_untracked(|o| if o.can_accept() { o.on_accept } else { None });
        if let Some(callback) = callback {
            callback.run(());
        }
    }

    pub fn options(&self) -> Signal<DialogOptions> {
        self.options.into()
    }
}

impl Default for ConfirmDialogController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_confirm_dialog() -> ConfirmDialogController {
    use_context::<ConfirmDialogController>().expect("ConfirmDialogController not provided in context")
}

/// DELETE `{collection}/{id}`; returns the id that was removed server side.
pub async fn delete_entity<R: AggregateRoot>(
    client: &ApiClient,
    id: R::Id,
) -> Result<R::Id, ApiError> {
    client.delete(&R::element_path(id)).await?;
    Ok(id)
}

/// Standard delete flow bound to the dialog.
///
/// The row leaves `rows` only after the server confirmed the delete; on
/// failure the dialog stays open with loading cleared.
pub fn confirm_delete<R: AggregateRoot>(
    dialog: ConfirmDialogController,
    client: ApiClient,
    notifications: Notifications,
    rows: RwSignal<Vec<R>>,
    id: R::Id,
    description: impl Into<String>,
    success_message: impl Into<String>,
) {
    let success_message = success_message.into();
    let on_accept = Callback::new(move |_: ()| {
        dialog.set_loading(true);
        let client = client.clone();
        let success_message = success_message.clone();
        spawn_local(async move {
            match delete_entity::<R>(&client, id).await {
                Ok(deleted) => {
                    notifications.success(success_message);
                    rows.update(|list| list_cache::remove(list, deleted));
                    dialog.close();
                }
                Err(e) => {
                    notifications.error(e.user_message());
                    dialog.set_loading(false);
                }
            }
        });
    });

    dialog.request(ConfirmRequest::delete(description).on_accept(on_accept));
}

/// Renders the dialog configured through [`ConfirmDialogController`]
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let dialog = use_confirm_dialog();
    let options = dialog.options();

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <Show when=move || options.with(|o| o.open)>
            <div class="modal-overlay" on:click=move |_| dialog.cancel()>
                <div class="modal modal--confirm" role="alertdialog" on:click=stop_propagation>
                    <div class="modal-header">
                        <h2 class="modal-title">{move || options.with(|o| o.title.clone())}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{move || options.with(|o| o.description.clone())}</p>
                    </div>
                    <div class="modal-footer">
                        <button
                            class="button button--secondary"
                            disabled=move || options.with(|o| o.is_loading)
                            on:click=move |_| dialog.cancel()
                        >
                            {move || options.with(|o| o.cancel_text.clone())}
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || !options.with(|o| o.can_accept())
                            on:click=move |_| dialog.accept()
                        >
                            {move || {
                                options.with(|o| {
                                    if o.is_loading { "Procesando...".to_string() } else { o.accept_text.clone() }
                                })
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{reactive_runtime, settle, test_client, RecordingTransport};
    use crate::shared::api::Method;
    use crate::shared::notifications::NotificationKind;
    use contracts::domain::a001_product_category::aggregate::ProductCategory;
    use contracts::domain::a004_product::aggregate::Product;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn category(id: i64) -> ProductCategory {
        ProductCategory {
            id,
            name: format!("Categoría {id}"),
            description: String::new(),
            status: "ACTIVE".into(),
        }
    }

    fn request(title: &str, description: &str, accept: &str) -> ConfirmRequest {
        ConfirmRequest {
            title: title.into(),
            description: description.into(),
            accept_text: accept.into(),
            cancel_text: "Cancelar".into(),
            on_accept: None,
        }
    }

    #[test]
    fn test_new_request_replaces_previous_configuration() {
        let first = DialogOptions::from(request("Borrar", "Primera", "Eliminar")).with_loading(true);
        assert!(first.open && first.is_loading);

        let second = DialogOptions::from(ConfirmRequest {
            description: String::new(),
            ..request("Otra", "", "Aceptar")
        });

        assert!(second.open);
        assert!(!second.is_loading);
        assert_eq!(second.title, "Otra");
        assert_eq!(second.description, "");
        assert_eq!(second.accept_text, "Aceptar");
    }

    #[test]
    fn test_loading_blocks_accept() {
        let options = DialogOptions::from(request("t", "d", "Eliminar"));
        assert!(options.can_accept());
        let loading = options.with_loading(true);
        assert!(!loading.can_accept());
        let closed = loading.closed();
        assert!(!closed.open);
        assert!(!closed.is_loading);
        assert!(!closed.can_accept());
    }

    #[test]
    fn test_delete_request_defaults() {
        let request = ConfirmRequest::delete("Esta acción no se puede deshacer");
        assert_eq!(request.title, "¿Estás seguro?");
        assert_eq!(request.accept_text, "Eliminar");
        assert_eq!(request.cancel_text, "Cancelar");
        assert!(request.on_accept.is_none());
    }

    #[test]
    fn test_delete_entity_issues_delete_on_element_path() {
        let transport = RecordingTransport::new();
        transport.respond(200, "");
        let client = test_client(&transport);

        let deleted = block_on(delete_entity::<Product>(&client, 7)).unwrap();

        assert_eq!(deleted, 7);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://api.test/products/7");
    }

    #[test]
    fn test_failed_delete_reports_error() {
        let transport = RecordingTransport::new();
        transport.respond(409, r#"{"message":"El producto tiene pedidos"}"#);
        let client = test_client(&transport);

        let err = block_on(delete_entity::<Product>(&client, 7)).unwrap_err();
        assert_eq!(err.user_message(), "El producto tiene pedidos");
    }

    #[test]
    fn test_confirm_delete_removes_row_only_after_success() {
        let _owner = reactive_runtime();
        let transport = RecordingTransport::new();
        transport.respond(500, r#"{"message":"La categoría tiene productos"}"#);
        transport.respond(200, "");
        let notifications = Notifications::new();
        let dialog = ConfirmDialogController::new();
        let rows = RwSignal::new(vec![category(1), category(7), category(9)]);
        let row_ids = move || rows.with_untracked(|r| r.iter().map(|c| c.id).collect::<Vec<_>>());

        confirm_delete::<ProductCategory>(
            dialog,
            test_client(&transport),
            notifications,
            rows,
            7,
            "¿Eliminar la categoría?",
            "Categoría eliminada exitosamente",
        );
        let options = dialog.options();
        assert!(options.with_untracked(|o| o.open && !o.is_loading));
        assert!(transport.requests().is_empty());

        dialog.accept();
        assert!(options.with_untracked(|o| o.is_loading));
        settle();

        // failure: dialog stays open, loading cleared, list untouched
        assert!(options.with_untracked(|o| o.open && !o.is_loading));
        assert_eq!(row_ids(), vec![1, 7, 9]);
        let shown = notifications.current();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Error);
        assert_eq!(shown[0].message, "La categoría tiene productos");

        dialog.accept();
        settle();

        assert!(options.with_untracked(|o| !o.open && !o.is_loading));
        assert_eq!(row_ids(), vec![1, 9]);
        let shown = notifications.current();
        assert_eq!(shown.last().map(|n| n.kind), Some(NotificationKind::Success));
        assert_eq!(shown.last().map(|n| n.message.as_str()), Some("Categoría eliminada exitosamente"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests
            .iter()
            .all(|r| r.method == Method::Delete && r.url == "http://api.test/product-categories/7"));
    }

    #[test]
    fn test_cancel_is_ignored_while_deleting() {
        let _owner = reactive_runtime();
        let dialog = ConfirmDialogController::new();
        dialog.request(ConfirmRequest::delete("¿Eliminar?"));
        dialog.set_loading(true);

        dialog.cancel();
        assert!(dialog.options().with_untracked(|o| o.open));

        dialog.set_loading(false);
        dialog.cancel();
        assert!(!dialog.options().with_untracked(|o| o.open));
    }
}

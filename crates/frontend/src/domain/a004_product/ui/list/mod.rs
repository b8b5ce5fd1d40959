use contracts::domain::a004_product::aggregate::{Product, ProductListing};
use contracts::domain::common::AggregateRoot;
use contracts::system::users::User;
use leptos::prelude::*;

use super::details::ProductFormFields;
use crate::shared::api::use_api;
use crate::shared::components::table::{
    format_price, price_matches, price_text, row_actions, stock_matches, ColumnDef, DataTable,
};
use crate::shared::confirm_dialog::{confirm_delete, use_confirm_dialog};
use crate::shared::fetch::use_resource_rows;
use crate::shared::modal::ResourceModal;
use crate::shared::notifications::use_notifications;
use crate::shared::resource_form::ResourceForm;
use crate::system::auth::context::use_auth;

/// Size used by administrators to load every product in one page
const ADMIN_PAGE_SIZE: u32 = 99_999;

/// Endpoint of the products table for `user`.
///
/// Administrators see every product, everyone else only their own. The
/// server enforces the same rule; this only picks the view.
pub fn resolve_product_list_endpoint(user: &User) -> String {
    if user.is_admin() {
        format!("{}?page=1&size={}", Product::collection_path(), ADMIN_PAGE_SIZE)
    } else {
        format!("{}/seller/{}", Product::collection_path(), user.id)
    }
}

pub fn product_columns(
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
) -> Vec<ColumnDef<Product>> {
    vec![
        ColumnDef::new("description", "Descripción", |p: &Product| p.description.clone()).sortable(),
        ColumnDef::new("parent", "Producto Padre", |p: &Product| p.predefined_product.name.clone())
            .sortable(),
        ColumnDef::new("category", "Categoría", |p: &Product| {
            p.predefined_product.category.name.clone()
        })
        .sortable(),
        ColumnDef::new("image", "Imágen", |p: &Product| p.image_url().to_string())
            .no_filter()
            .cell(|p: &Product| {
                let src = p.image_url().to_string();
                view! { <img class="table__thumb" src=src alt="producto" /> }.into_any()
            }),
        ColumnDef::new("price", "Precio", |p: &Product| price_text(p.price))
            .sort_by(|a: &Product, b: &Product| a.price.cmp(&b.price))
            .filter_with(|p: &Product, q: &str| price_matches(p.price, q))
            .cell(|p: &Product| format_price(p.price).into_any())
            .right(),
        ColumnDef::new("stock", "Stock", |p: &Product| p.stock.to_string())
            .sort_by(|a: &Product, b: &Product| a.stock.cmp(&b.stock))
            .filter_with(|p: &Product, q: &str| stock_matches(p.stock, q))
            .right(),
        row_actions(on_edit, on_delete),
    ]
}

/// Products page: administrators see every product, sellers only their own
#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let endpoint = Signal::derive(move || {
        auth.user()
            .map(|user| resolve_product_list_endpoint(&user))
            .unwrap_or_default()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{Product::list_name()}</h1>
            </div>
            // RequireAuth guarantees a user; the table mounts once the endpoint is known
            <Show when=move || !endpoint.get().is_empty()>
                <ProductsTableView endpoint=endpoint />
            </Show>
        </div>
    }
}

#[component]
fn ProductsTableView(endpoint: Signal<String>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();
    let dialog = use_confirm_dialog();

    let (rows, fetch) =
        use_resource_rows::<ProductListing, Product>(endpoint, ProductListing::into_products);
    let form = ResourceForm::<Product>::new();

    let on_edit = Callback::new(move |product: Product| form.open_update(product));
    let on_delete = Callback::new(move |product: Product| {
        confirm_delete::<Product>(
            dialog,
            client.get_value(),
            notifications,
            rows,
            product.id,
            "¿Estás seguro que deseas eliminar este producto? Esta acción no se puede deshacer",
            "Producto eliminado exitosamente",
        )
    });

    view! {
        <div class="page__content">
            <DataTable
                columns=product_columns(on_edit, on_delete)
                rows=rows
                loading=fetch.loading
                create_label="Nuevo producto"
                on_create=Callback::new(move |_| form.open_create())
            />
        </div>
        <ResourceModal
            form=form
            on_submit=Callback::new(move |_| form.submit_into(client.get_value(), notifications, rows))
        >
            <ProductFormFields form=form />
        </ResourceModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{reactive_runtime, settle, test_client, RecordingTransport};
    use crate::shared::api::Method;
    use crate::shared::components::table::TableState;
    use crate::shared::confirm_dialog::ConfirmDialogController;
    use crate::shared::notifications::Notifications;
    use contracts::system::users::UserRole;
    use pretty_assertions::assert_eq;

    fn user(id: i64, roles: &[i64]) -> User {
        User {
            id,
            first_name: "Luis".into(),
            last_name: "Mera".into(),
            email: "luis@agromar.ec".into(),
            user_role: roles
                .iter()
                .map(|&role_id| UserRole { role_id, role: None })
                .collect(),
        }
    }

    fn product(id: i64, price: &str, stock: i32) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "description": format!("Producto {id}"),
            "predefinedProduct": {
                "id": 1, "name": "Tomate", "description": "Hortaliza",
                "category": {"id": 2, "name": "Hortalizas"}
            },
            "image": null,
            "price": price.parse::<f64>().unwrap(),
            "stock": stock
        }))
        .unwrap()
    }

    fn noop() -> Callback<Product> {
        Callback::new(|_| {})
    }

    #[test]
    fn test_admin_gets_all_products_endpoint() {
        assert_eq!(
            resolve_product_list_endpoint(&user(1, &[1])),
            "/products?page=1&size=99999"
        );
        assert_eq!(
            resolve_product_list_endpoint(&user(1, &[2, 1])),
            "/products?page=1&size=99999"
        );
    }

    #[test]
    fn test_non_admin_gets_seller_endpoint() {
        assert_eq!(resolve_product_list_endpoint(&user(42, &[2])), "/products/seller/42");
        assert_eq!(resolve_product_list_endpoint(&user(7, &[])), "/products/seller/7");
    }

    #[test]
    fn test_price_column_accepts_dollar_prefix() {
        let columns = product_columns(noop(), noop());
        let rows = vec![product(1, "12.5", 3), product(2, "125", 8)];

        for query in ["$12.50", "12.50"] {
            let mut state = TableState::default();
            state.set_filter("price", query.into());
            let view = state.apply(&columns, &rows);
            assert_eq!(view.rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        }
    }

    #[test]
    fn test_stock_column_filters_integer_text() {
        let columns = product_columns(noop(), noop());
        let rows = vec![product(1, "1", 30), product(2, "1", 8)];

        let mut state = TableState::default();
        state.set_filter("stock", "3".into());
        assert_eq!(state.apply(&columns, &rows).rows, vec![rows[0].clone()]);
    }

    #[test]
    fn test_admin_delete_of_row_seven() {
        let _owner = reactive_runtime();
        let transport = RecordingTransport::new();
        transport.respond(200, "");
        let notifications = Notifications::new();
        let dialog = ConfirmDialogController::new();
        let rows = RwSignal::new(vec![product(5, "1", 1), product(7, "2", 2), product(9, "3", 3)]);

        confirm_delete::<Product>(
            dialog,
            test_client(&transport),
            notifications,
            rows,
            7,
            "¿Eliminar producto?",
            "Producto eliminado exitosamente",
        );
        dialog.accept();
        settle();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].url, "http://api.test/products/7");
        assert_eq!(rows.with_untracked(|r| r.iter().map(|p| p.id).collect::<Vec<_>>()), vec![5, 9]);
        assert_eq!(notifications.current()[0].message, "Producto eliminado exitosamente");
        assert!(!dialog.options().with_untracked(|o| o.open));
    }

    #[test]
    fn test_failed_delete_keeps_rows() {
        let _owner = reactive_runtime();
        let transport = RecordingTransport::new();
        transport.respond(500, r#"{"message":"No se pudo eliminar"}"#);
        let notifications = Notifications::new();
        let dialog = ConfirmDialogController::new();
        let rows = RwSignal::new(vec![product(7, "2", 2)]);

        confirm_delete::<Product>(
            dialog,
            test_client(&transport),
            notifications,
            rows,
            7,
            "¿Eliminar producto?",
            "Producto eliminado exitosamente",
        );
        dialog.accept();
        settle();

        assert_eq!(notifications.current()[0].message, "No se pudo eliminar");
        assert_eq!(rows.with_untracked(Vec::len), 1);
        assert!(dialog.options().with_untracked(|o| o.open && !o.is_loading));
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_product_category::ui::list::CategoriesPage;
use crate::domain::a002_unit_of_measure::ui::list::UnitsPage;
use crate::domain::a003_predefined_product::ui::list::PredefinedProductsPage;
use crate::domain::a004_product::ui::catalog::CatalogPage;
use crate::domain::a004_product::ui::list::ProductsPage;
use crate::layout::Shell;
use crate::system::auth::guard::{RequireAdmin, RequireAuth};
use crate::system::pages::admin::AdminDashboardPage;
use crate::system::pages::home::HomePage;
use crate::system::users::ui::list::UsersPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"Página no encontrada"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/productos") view=CatalogPage />
                    <Route
                        path=path!("/admin")
                        view=|| view! { <RequireAuth><AdminDashboardPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/admin/users")
                        view=|| view! { <RequireAdmin><UsersPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/admin/products")
                        view=|| view! { <RequireAuth><ProductsPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/admin/categories")
                        view=|| view! { <RequireAdmin><CategoriesPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/admin/units")
                        view=|| view! { <RequireAdmin><UnitsPage /></RequireAdmin> }
                    />
                    <Route
                        path=path!("/admin/predefined-products")
                        view=|| view! { <RequireAdmin><PredefinedProductsPage /></RequireAdmin> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}

use contracts::domain::a004_product::aggregate::{Product, ProductListResponse};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::format_price;
use crate::shared::config::use_config;
use crate::shared::fetch::use_fetch;

/// Products per storefront page
pub const CATALOG_PAGE_SIZE: u32 = 12;

/// `page` is 1-based, as the API expects
pub fn catalog_endpoint(page: u32) -> String {
    format!(
        "{}?page={}&size={}",
        Product::collection_path(),
        page.max(1),
        CATALOG_PAGE_SIZE
    )
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let src = product.image_url().to_string();
    view! {
        <article class="product-card">
            <img class="product-card__image" src=src alt=product.description.clone() />
            <div class="product-card__body">
                <span class="product-card__category">
                    {product.predefined_product.category.name.clone()}
                </span>
                <h3 class="product-card__title">{product.description.clone()}</h3>
                <p class="product-card__price">{format_price(product.price)}</p>
            </div>
        </article>
    }
}

/// Public storefront at `/productos`
#[component]
pub fn CatalogPage() -> impl IntoView {
    // 0-indexed for the pager
    let page = RwSignal::new(0usize);
    let endpoint = Signal::derive(move || catalog_endpoint(page.get() as u32 + 1));
    let fetch = use_fetch::<ProductListResponse>(endpoint);
    let payments_enabled = use_config().paypal_client_id.is_some();

    let products = move || fetch.data.with(|d| d.as_ref().map(|r| r.products.clone()).unwrap_or_default());
    let total_pages = Signal::derive(move || {
        fetch.data.with(|d| d.as_ref().map_or(1, |r| r.total_pages() as usize))
    });
    let total_count = Signal::derive(move || {
        fetch.data.with(|d| d.as_ref().map_or(0, |r| r.total as usize))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Productos"</h1>
            </div>
            {move || fetch.error.get().map(|e| view! {
                <div class="alert alert--error">{e.user_message()}</div>
            })}
            <Show
                when=move || !(fetch.loading.get() && fetch.data.with(Option::is_none))
                fallback=|| view! { <p class="page__loading">"Cargando productos..."</p> }
            >
                <div class="catalog-grid">
                    <For
                        each=products
                        key=|p| p.id
                        children=|product| view! { <ProductCard product=product /> }
                    />
                </div>
                <Show when=move || fetch.data.with(|d| d.as_ref().is_some_and(|r| r.products.is_empty()))>
                    <p class="catalog-empty">"No hay productos disponibles."</p>
                </Show>
            </Show>
            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total_count
                on_page_change=Callback::new(move |p| page.set(p))
            />
            {payments_enabled.then(|| view! {
                <p class="catalog-footer">"Pago seguro con PayPal"</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_endpoint() {
        assert_eq!(catalog_endpoint(1), "/products?page=1&size=12");
        assert_eq!(catalog_endpoint(3), "/products?page=3&size=12");
        assert_eq!(catalog_endpoint(0), "/products?page=1&size=12");
    }
}

use crate::domain::a003_predefined_product::aggregate::PredefinedProduct;
use crate::domain::common::{AggregateRoot, EntityForm};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

/// Картинка по умолчанию, если у товара нет изображения
pub const PLACEHOLDER_IMAGE: &str = "/no-image.png";

// ============================================================================
// Корень агрегата
// ============================================================================

/// Товар продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub description: String,
    pub predefined_product: PredefinedProduct,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Product {
    /// URL изображения с подстановкой заглушки
    pub fn image_url(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

impl AggregateRoot for Product {
    type Id = i64;
    type Form = ProductForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_path() -> &'static str {
        "/products"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }

    fn to_form(&self) -> Self::Form {
        ProductForm {
            description: self.description.clone(),
            predefined_product_id: Some(self.predefined_product.id),
            image: self.image.clone().unwrap_or_default(),
            price: format!("{:.2}", self.price),
            stock: self.stock.to_string(),
        }
    }
}

/// Ответ `GET /products?page=&size=`: товары плюс метаданные пагинации
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

impl ProductListResponse {
    pub fn total_pages(&self) -> u32 {
        if self.size == 0 || self.total == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// Тело ответа списка товаров: постраничный ответ или простой массив
/// (`/products/seller/{id}` у некоторых версий API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
    Paged(ProductListResponse),
    Plain(Vec<Product>),
}

impl ProductListing {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductListing::Paged(response) => response.products,
            ProductListing::Plain(products) => products,
        }
    }
}

// ============================================================================
// Формы и тела запросов
// ============================================================================

/// Форма товара. Цена и остаток хранятся как введённый текст и
/// разбираются только при отправке.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 4, message = "La descripción debe tener al menos 4 caracteres"))]
    pub description: String,
    pub predefined_product_id: Option<i64>,
    #[validate(custom(function = "validate_image"))]
    pub image: String,
    #[validate(custom(function = "validate_price"))]
    pub price: String,
    #[validate(custom(function = "validate_stock"))]
    pub stock: String,
}

/// Тело запроса POST/PATCH `/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub description: String,
    pub predefined_product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().trim_start_matches('$').trim();
    Decimal::from_str(cleaned).ok()
}

fn validate_price(raw: &str) -> Result<(), ValidationError> {
    match parse_price(raw) {
        Some(price) if price > Decimal::ZERO => Ok(()),
        Some(_) => Err(ValidationError::new("price_range")
            .with_message("El precio debe ser mayor a 0".into())),
        None => Err(ValidationError::new("price_format")
            .with_message("Ingrese un precio válido".into())),
    }
}

/// Пустая ссылка на картинку допустима: товар покажет заглушку
fn validate_image(raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Ingrese una URL válida".into()))
    }
}

fn validate_stock(raw: &str) -> Result<(), ValidationError> {
    match raw.trim().parse::<i32>() {
        Ok(stock) if stock >= 0 => Ok(()),
        Ok(_) => Err(ValidationError::new("stock_range")
            .with_message("El stock no puede ser negativo".into())),
        Err(_) => Err(ValidationError::new("stock_format")
            .with_message("Ingrese un número entero".into())),
    }
}

impl EntityForm for ProductForm {
    type Payload = ProductPayload;

    fn into_payload(&self, _creating: bool) -> Result<Self::Payload, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.predefined_product_id.is_none() {
            errors.add(
                "predefined_product_id",
                ValidationError::new("required")
                    .with_message("Seleccione un producto padre".into()),
            );
        }

        let price = parse_price(&self.price);
        let stock = self.stock.trim().parse::<i32>().ok();
        match (errors.errors().is_empty(), self.predefined_product_id, price, stock) {
            (true, Some(predefined_product_id), Some(price), Some(stock)) => Ok(ProductPayload {
                description: self.description.clone(),
                predefined_product_id,
                image: Some(self.image.trim().to_string()).filter(|s| !s.is_empty()),
                price: price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                stock,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> ProductForm {
        ProductForm {
            description: "Tomate riñón".into(),
            predefined_product_id: Some(3),
            image: String::new(),
            price: "$12.5".into(),
            stock: "40".into(),
        }
    }

    #[test]
    fn test_valid_form_parses_price_and_stock() {
        let payload = valid_form().into_payload(true).unwrap();
        assert_eq!(
            payload,
            ProductPayload {
                description: "Tomate riñón".into(),
                predefined_product_id: 3,
                image: None,
                price: Decimal::new(1250, 2),
                stock: 40,
            }
        );
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        for (raw, cents) in [("0.125", 13), ("2.675", 268), ("$0.135", 14), ("0.124", 12)] {
            let form = ProductForm {
                price: raw.into(),
                ..valid_form()
            };
            let payload = form.into_payload(true).unwrap();
            assert_eq!(payload.price, Decimal::new(cents, 2), "price {raw}");
        }
    }

    #[test]
    fn test_invalid_numbers_are_field_errors() {
        let form = ProductForm {
            price: "doce".into(),
            stock: "-1".into(),
            ..valid_form()
        };
        let errors = form.into_payload(true).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("stock"));
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn test_bad_image_url_is_rejected() {
        let form = ProductForm {
            image: "not a url".into(),
            ..valid_form()
        };
        let errors = form.into_payload(false).unwrap_err();
        assert!(errors.field_errors().contains_key("image"));
    }

    #[test]
    fn test_image_url_falls_back_to_placeholder() {
        let raw = r#"{
            "id": 7,
            "description": "Papa",
            "predefinedProduct": {
                "id": 1, "name": "Papa", "description": "Papa chola",
                "category": {"id": 1, "name": "Tubérculos"}
            },
            "image": null,
            "price": 12.5,
            "stock": 3
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(product.to_form().price, "12.50");
    }

    #[test]
    fn test_total_pages() {
        let response = ProductListResponse {
            products: vec![],
            total: 25,
            page: 1,
            size: 12,
        };
        assert_eq!(response.total_pages(), 3);
        assert_eq!(ProductListResponse::default().total_pages(), 1);
    }

    #[test]
    fn test_listing_accepts_paged_and_plain_bodies() {
        let product = r#"{"id":7,"description":"Banano orito","predefinedProduct":{"id":1,"name":"Banano","description":"Fruta","category":{"id":1,"name":"Frutas"}},"price":1.5,"stock":10}"#;

        let paged: ProductListing =
            serde_json::from_str(&format!(r#"{{"products":[{product}],"total":1}}"#)).unwrap();
        let plain: ProductListing = serde_json::from_str(&format!("[{product}]")).unwrap();

        let paged = paged.into_products();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged, plain.into_products());
        assert_eq!(paged[0].image_url(), PLACEHOLDER_IMAGE);
    }
}

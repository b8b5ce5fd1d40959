use crate::domain::a001_product_category::aggregate::ProductCategory;
use crate::domain::a002_unit_of_measure::aggregate::UnitOfMeasure;
use crate::domain::common::{AggregateRoot, EntityForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// Корень агрегата
// ============================================================================

/// Товар-родитель из каталога ("Producto Padre"): задаёт категорию и
/// единицу измерения для товаров продавцов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ProductCategory,
    #[serde(default)]
    pub unit: Option<UnitOfMeasure>,
}

impl AggregateRoot for PredefinedProduct {
    type Id = i64;
    type Form = PredefinedProductForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_path() -> &'static str {
        "/predefined-products"
    }

    fn element_name() -> &'static str {
        "Producto padre"
    }

    fn list_name() -> &'static str {
        "Productos padre"
    }

    fn to_form(&self) -> Self::Form {
        PredefinedProductForm {
            name: self.name.clone(),
            description: self.description.clone(),
            category_id: Some(self.category.id),
            unit_id: self.unit.as_ref().map(|u| u.id),
        }
    }
}

// ============================================================================
// Формы и тела запросов
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PredefinedProductForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 4, message = "La descripción debe tener al menos 4 caracteres"))]
    pub description: String,
    pub category_id: Option<i64>,
    pub unit_id: Option<i64>,
}

/// Тело запроса POST/PATCH `/predefined-products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredefinedProductPayload {
    pub name: String,
    pub description: String,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<i64>,
}

impl EntityForm for PredefinedProductForm {
    type Payload = PredefinedProductPayload;

    fn into_payload(&self, _creating: bool) -> Result<Self::Payload, ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if self.category_id.is_none() {
            errors.add(
                "category_id",
                ValidationError::new("required").with_message("Seleccione una categoría".into()),
            );
        }
        match (errors.errors().is_empty(), self.category_id) {
            (true, Some(category_id)) => Ok(PredefinedProductPayload {
                name: self.name.clone(),
                description: self.description.clone(),
                category_id,
                unit_id: self.unit_id,
            }),
            _ => Err(errors),
        }
    }
}

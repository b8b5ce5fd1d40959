use crate::domain::common::{AggregateRoot, EntityForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ============================================================================
// Корень агрегата
// ============================================================================

/// Категория товаров маркетплейса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
}

impl AggregateRoot for ProductCategory {
    type Id = i64;
    type Form = ProductCategoryForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_path() -> &'static str {
        "/product-categories"
    }

    fn element_name() -> &'static str {
        "Categoría"
    }

    fn list_name() -> &'static str {
        "Categorías"
    }

    fn created_message() -> String {
        format!("{} creada exitosamente", Self::element_name())
    }

    fn updated_message() -> String {
        format!("{} actualizada exitosamente", Self::element_name())
    }

    fn deleted_message() -> String {
        format!("{} eliminada exitosamente", Self::element_name())
    }

    fn to_form(&self) -> Self::Form {
        ProductCategoryForm {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

// ============================================================================
// Формы и тела запросов
// ============================================================================

/// Форма создания/обновления категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductCategoryForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 4, message = "La descripción debe tener al menos 4 caracteres"))]
    pub description: String,
}

impl EntityForm for ProductCategoryForm {
    type Payload = ProductCategoryForm;

    fn into_payload(&self, _creating: bool) -> Result<Self::Payload, ValidationErrors> {
        self.validate()?;
        Ok(self.clone())
    }
}

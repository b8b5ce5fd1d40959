use crate::domain::common::{AggregateRoot, EntityForm};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ============================================================================
// Корень агрегата
// ============================================================================

/// Единица измерения (kg, lb, quintal...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub status: String,
}

impl AggregateRoot for UnitOfMeasure {
    type Id = i64;
    type Form = UnitOfMeasureForm;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_path() -> &'static str {
        "/units"
    }

    fn element_name() -> &'static str {
        "Unidad de medida"
    }

    fn list_name() -> &'static str {
        "Unidades de medida"
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
        UnitOfMeasureForm {
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }
}

// ============================================================================
// Формы и тела запросов
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UnitOfMeasureForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 1, max = 10, message = "La abreviatura debe tener entre 1 y 10 caracteres"))]
    pub abbreviation: String,
}

impl EntityForm for UnitOfMeasureForm {
    type Payload = UnitOfMeasureForm;

    fn into_payload(&self, _creating: bool) -> Result<Self::Payload, ValidationErrors> {
        self.validate()?;
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_length_is_bounded() {
        let form = UnitOfMeasureForm {
            name: "Quintal".into(),
            abbreviation: "quintal-largo".into(),
        };
        let errors = form.into_payload(true).unwrap_err();
        assert!(errors.field_errors().contains_key("abbreviation"));
    }

    #[test]
    fn test_to_form_copies_editable_fields() {
        let unit = UnitOfMeasure {
            id: 1,
            name: "Kilogramo".into(),
            abbreviation: "kg".into(),
            status: "ACTIVE".into(),
        };
        let form = unit.to_form();
        assert_eq!(form.name, "Kilogramo");
        assert_eq!(form.abbreviation, "kg");
    }
}

use super::AggregateId;
use serde::{de::DeserializeOwned, Serialize};
use validator::ValidationErrors;

/// Remotely persisted entity exposed through a REST collection.
///
/// The collection lives at [`collection_path`](AggregateRoot::collection_path);
/// a single element at `{collection_path}/{id}`.
pub trait AggregateRoot: Clone + DeserializeOwned + Send + Sync + 'static {
    type Id: AggregateId + Send + Sync + 'static;
    /// Editable form bound to this entity in the create/update dialog.
    type Form: EntityForm;

    fn id(&self) -> Self::Id;

    /// Collection endpoint, e.g. `/product-categories`.
    fn collection_path() -> &'static str;

    /// Human readable singular name ("Categoría").
    fn element_name() -> &'static str;

    /// Human readable plural name ("Categorías").
    fn list_name() -> &'static str;

    /// Pre-populates the form when the dialog opens in update mode.
    fn to_form(&self) -> Self::Form;

    fn element_path(id: Self::Id) -> String {
        format!("{}/{}", Self::collection_path(), id.as_string())
    }

    fn created_message() -> String {
        format!("{} creado exitosamente", Self::element_name())
    }

    fn updated_message() -> String {
        format!("{} actualizado exitosamente", Self::element_name())
    }

    fn deleted_message() -> String {
        format!("{} eliminado exitosamente", Self::element_name())
    }
}

/// Client side state of an entity form.
///
/// `into_payload` is the only way to obtain something that can be sent to
/// the API, so an invalid form never reaches the network.
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    type Payload: Serialize + 'static;

    fn into_payload(&self, creating: bool) -> Result<Self::Payload, ValidationErrors>;
}

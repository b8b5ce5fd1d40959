//! Create/update dialog state for a single resource.
//!
//! ```text
//! Closed ──open_create──▶ OpenCreate ─┐
//!   │                                 ├─submit (valid)─▶ Submitting ──ok──▶ Closed
//!   └────open_update(e)─▶ OpenUpdate ─┘                      │
//!                            ▲                                └─err─▶ back to Open*
//! ```
//! Validation runs before the transition to `Submitting`; an invalid form
//! never produces a request.

use crate::shared::api::{ApiClient, ApiError};
use crate::shared::list_cache;
use crate::shared::notifications::Notifications;
use contracts::domain::common::{AggregateRoot, EntityForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Which request a submission issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    /// POST to the collection
    Create,
    /// PATCH to `{collection}/{id}`
    Update(Id),
}

impl<Id> FormMode<Id> {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<R> {
    Closed,
    OpenCreate,
    OpenUpdate(R),
    Submitting { target: Option<R> },
}

impl<R> Default for ModalState<R> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<R: AggregateRoot> ModalState<R> {
    /// Returns false while a submission is in flight
    pub fn open_create(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = ModalState::OpenCreate;
        true
    }

    pub fn open_update(&mut self, entity: R) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = ModalState::OpenUpdate(entity);
        true
    }

    /// Closing is ignored while submitting
    pub fn close(&mut self) {
        if !self.is_submitting() {
            *self = ModalState::Closed;
        }
    }

    /// Mode of the open form, `None` when closed or submitting
    pub fn mode(&self) -> Option<FormMode<R::Id>> {
        match self {
            ModalState::OpenCreate => Some(FormMode::Create),
            ModalState::OpenUpdate(entity) => Some(FormMode::Update(entity.id())),
            _ => None,
        }
    }

    pub fn begin_submit(&mut self) -> Option<FormMode<R::Id>> {
        let mode = self.mode()?;
        let target = match std::mem::take(self) {
            ModalState::OpenUpdate(entity) => Some(entity),
            _ => None,
        };
        *self = ModalState::Submitting { target };
        Some(mode)
    }

    /// Success closes the dialog; failure returns to the form it came from
    pub fn finish(&mut self, succeeded: bool) {
        let ModalState::Submitting { target } = std::mem::take(self) else {
            return;
        };
        *self = match (succeeded, target) {
            (true, _) => ModalState::Closed,
            (false, Some(entity)) => ModalState::OpenUpdate(entity),
            (false, None) => ModalState::OpenCreate,
        };
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Submitting { .. })
    }

    pub fn is_update(&self) -> bool {
        matches!(
            self,
            ModalState::OpenUpdate(_) | ModalState::Submitting { target: Some(_) }
        )
    }
}

/// Per-field validation messages, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let map = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valor inválido ({})", first.code));
                Some((field.to_string(), message))
            })
            .collect();
        FieldErrors(map)
    }
}

/// Client-side validation; the payload only exists for a valid form.
pub fn validate_form<R: AggregateRoot>(
    form: &R::Form,
    mode: &FormMode<R::Id>,
) -> Result<<R::Form as EntityForm>::Payload, FieldErrors> {
    form.into_payload(mode.is_create())
        .map_err(|e| FieldErrors::from(&e))
}

/// POST (create) or PATCH (update) the payload; the server echoes the entity.
pub async fn send_payload<R: AggregateRoot>(
    client: &ApiClient,
    mode: &FormMode<R::Id>,
    payload: &<R::Form as EntityForm>::Payload,
) -> Result<R, ApiError> {
    match mode {
        FormMode::Create => client.post(R::collection_path(), payload).await,
        FormMode::Update(id) => client.patch(&R::element_path(*id), payload).await,
    }
}

/// Reactive controller of one resource dialog
pub struct ResourceForm<R: AggregateRoot> {
    state: RwSignal<ModalState<R>>,
    pub form: RwSignal<R::Form>,
    pub errors: RwSignal<FieldErrors>,
}

impl<R: AggregateRoot> Clone for ResourceForm<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: AggregateRoot> Copy for ResourceForm<R> {}

impl<R: AggregateRoot> ResourceForm<R> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalState::Closed),
            form: RwSignal::new(R::Form::default()),
            errors: RwSignal::new(FieldErrors::default()),
        }
    }

    pub fn open_create(&self) {
        let mut opened = false;
        self.state.update(|s| opened = s.open_create());
        if opened {
            self.form.set(R::Form::default());
            self.errors.set(FieldErrors::default());
        }
    }

    /// Opens in update mode with fields pre-populated from `entity`
    pub fn open_update(&self, entity: R) {
        let form = entity.to_form();
        let mut opened = false;
        self.state.update(|s| opened = s.open_update(entity));
        if opened {
            self.form.set(form);
            self.errors.set(FieldErrors::default());
        }
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn is_update(&self) -> bool {
        self.state.with(|s| s.is_update())
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Validate, then send; `on_success` receives the entity from the server.
    pub fn submit(&self, client: ApiClient, notifications: Notifications, on_success: Callback<R>) {
        let Some(mode) = self.state.with_untracked(|s| s.mode()) else {
            return;
        };
        let payload = match self.form.with_untracked(|f| validate_form::<R>(f, &mode)) {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("{} form invalid: {:?}", R::element_name(), errors);
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::default());
        self.state.update(|s| {
            s.begin_submit();
        });

        let this = *self;
        spawn_local(async move {
            match send_payload::<R>(&client, &mode, &payload).await {
                Ok(saved) => {
                    notifications.success(if mode.is_create() {
                        R::created_message()
                    } else {
                        R::updated_message()
                    });
                    this.state.update(|s| s.finish(true));
                    on_success.run(saved);
                }
                Err(e) => {
                    notifications.error(e.user_message());
                    this.state.update(|s| s.finish(false));
                }
            }
        });
    }
}

impl<R: AggregateRoot> ResourceForm<R> {
    /// Submit and reconcile the saved entity into the page's list
    pub fn submit_into(&self, client: ApiClient, notifications: Notifications, rows: RwSignal<Vec<R>>) {
        let was_update = self.state.with_untracked(|s| s.is_update());
        self.submit(
            client,
            notifications,
            Callback::new(move |saved: R| {
                rows.update(|list| list_cache::apply_saved(list, saved, was_update))
            }),
        );
    }
}

impl<R: AggregateRoot> Default for ResourceForm<R> {
    fn default() -> Self {
        Self::new()
    }
}

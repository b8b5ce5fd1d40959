pub mod api;
pub mod components;
pub mod config;
pub mod confirm_dialog;
pub mod fetch;
pub mod icons;
pub mod list_cache;
pub mod list_utils;
pub mod modal;
pub mod notifications;
pub mod resource_form;

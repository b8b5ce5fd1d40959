use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::confirm_dialog::ConfirmDialogController;
use crate::shared::notifications::Notifications;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = ApiClient::new(config.clone());
    let auth = AuthContext::new();

    // Application-level containers, one writer each
    provide_context(config);
    provide_context(client.clone());
    provide_context(Notifications::new());
    provide_context(ConfirmDialogController::new());
    provide_context(auth);

    auth.check_auth(client);

    view! {
        <AppRoutes />
    }
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::use_api;
use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_auth;

/// Login dialog opened from the header; shown while `AuthContext::login_open`
#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth();
    let client = StoredValue::new(use_api());
    let notifications = use_notifications();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            error_message.set(Some("Ingrese correo y contraseña".into()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);
        let client = client.get_value();
        spawn_local(async move {
            match auth.login(&client, email_val, password_val).await {
                Ok(user) => {
                    password.set(String::new());
                    notifications.success(format!("Bienvenido, {}", user.full_name()));
                }
                Err(e) => error_message.set(Some(e.user_message())),
            }
            is_loading.set(false);
        });
    };

    view! {
        <Show when=move || auth.login_open()>
            <Modal
                title="Iniciar Sesión"
                on_close=Callback::new(move |_| {
                    if !is_loading.get_untracked() {
                        auth.close_login();
                    }
                })
                class="modal--narrow"
            >
                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>
                <form class="form" on:submit=on_submit>
                    <Input
                        label="Correo electrónico"
                        input_type="email"
                        id="login-email"
                        autocomplete="username"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        disabled=is_loading
                    />
                    <Input
                        label="Contraseña"
                        input_type="password"
                        id="login-password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        disabled=is_loading
                    />
                    <div class="modal-footer">
                        <Button button_type="submit" loading=is_loading>
                            {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                        </Button>
                    </div>
                </form>
            </Modal>
        </Show>
    }
}

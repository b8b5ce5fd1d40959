use leptos::prelude::*;

use super::context::{use_auth, AuthStatus};

#[component]
fn AccessFallback(message: &'static str) -> impl IntoView {
    let auth = use_auth();
    view! {
        <div class="page page--centered">
            <p class="alert alert--warning">{message}</p>
            <Show when=move || !auth.is_authenticated()>
                <button class="button button--primary" on:click=move |_| auth.open_login()>
                    "Iniciar Sesión"
                </button>
            </Show>
        </div>
    }
}

/// Renders children only for a signed-in user
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);

    move || match auth.status() {
        AuthStatus::Checking => view! { <p class="page__loading">"Verificando sesión..."</p> }.into_any(),
        AuthStatus::Authenticated => children.with_value(|children| children()).into_any(),
        AuthStatus::NotAuthenticated => {
            view! { <AccessFallback message="Debe iniciar sesión para ver esta página." /> }.into_any()
        }
    }
}

/// Renders children only for an administrator
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let children = StoredValue::new(children);

    move || match auth.status() {
        AuthStatus::Checking => view! { <p class="page__loading">"Verificando sesión..."</p> }.into_any(),
        _ if auth.is_admin() => children.with_value(|children| children()).into_any(),
        _ => view! { <AccessFallback message="Acceso denegado. Se requieren permisos de administrador." /> }
            .into_any(),
    }
}

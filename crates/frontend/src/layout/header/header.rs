use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
fn UserMenu() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());
    let open = RwSignal::new(false);
    let user_name = move || auth.user().map(|u| u.full_name()).unwrap_or_default();

    let logout = move |_| {
        open.set(false);
        auth.logout();
        navigate.with_value(|navigate| navigate("/", Default::default()));
    };

    view! {
        <div class="header__user-menu">
            <button
                class="button button--ghost header__user-trigger"
                aria-label="Menú de usuario"
                on:click=move |_| open.update(|v| *v = !*v)
            >
                {icon("user")}
                <span class="header__user-name">{user_name}</span>
            </button>
            <Show when=move || open.get()>
                <div class="dropdown" on:click=move |_| open.set(false)>
                    <A href="/admin" attr:class="dropdown__item">
                        {icon("list")}
                        "Administración"
                    </A>
                    <div class="dropdown__separator"></div>
                    <button class="dropdown__item dropdown__item--danger" on:click=logout>
                        {icon("log-out")}
                        "Cerrar Sesión"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Верхняя панель: бренд, навигация и меню пользователя / вход
#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = use_auth();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"AgroMarEC"</A>
                <nav class="header__nav">
                    <A href="/" attr:class="header__link">"Inicio"</A>
                    <A href="/productos" attr:class="header__link">"Productos"</A>
                </nav>
            </div>
            <div class="header__actions">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || view! {
                        <button class="button button--ghost header__login" on:click=move |_| auth.open_login()>
                            {icon("log-in")}
                            "Iniciar Sesión"
                        </button>
                    }
                >
                    <UserMenu />
                </Show>
            </div>
        </header>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::context::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || match auth.user() {
        Some(user) => format!("Hola, {}", user.first_name),
        None => "Bienvenido".to_string(),
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"AgroMarEC"</h1>
            <p class="hero__subtitle">{greeting}</p>
            <p class="hero__text">
                "Productos del campo ecuatoriano, directo del productor a tu mesa."
            </p>
            <A href="/productos" attr:class="button button--primary">"Ver productos"</A>
        </section>
    }
}

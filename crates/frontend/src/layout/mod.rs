pub mod header;

use leptos::prelude::*;

use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::notifications::Toaster;
use crate::system::pages::login::LoginModal;
use header::AppHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |               AppHeader                  |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// ```
/// The toaster, confirm dialog and login modal are overlays owned by the shell.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <AppHeader />
            <main class="app-main">
                {children()}
            </main>
            <Toaster />
            <ConfirmDialog />
            <LoginModal />
        </div>
    }
}

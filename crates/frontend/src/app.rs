use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use crate::system::notifications::NotificationsStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());
    provide_context(NotificationsStore::new());

    view! {
        <AuthProvider>
            <AppShell />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}

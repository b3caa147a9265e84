//! Top bar: sidebar toggle, application title, notification bell, user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::context::{sign_out, use_auth};
use crate::system::notifications::ui::NotificationBell;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let modals = use_modal_stack();
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        log::info!("Signing out");
        modals.clear();
        ctx.close_all();
        sign_out(set_auth_state);
    };

    let user_name = move || {
        auth_state.with(|state| {
            state
                .user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_else(|| "Invitado".to_string())
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() { icon("chevrons-left") } else { icon("chevrons-right") }}
                </button>
                <span class="top-header__title">"Registro de Bienes"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell />

                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Cerrar sesión">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}

//! Application shell
//!
//! - `AppShell`: auth gate (sign-in / registration screens or `MainLayout`)
//! - `MainLayout`: sidebar, header and tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::notifications::use_notifications;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthScreen {
    SignIn,
    Register,
}

impl AuthScreen {
    fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/').ends_with("/register") {
            AuthScreen::Register
        } else {
            AuthScreen::SignIn
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications = use_notifications();

    tabs_store.init_router_integration();
    notifications.refresh();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// Shows the sign-in (or registration) screen until a token is present.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let initial = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| AuthScreen::from_path(&path))
        .unwrap_or(AuthScreen::SignIn);
    let screen = RwSignal::new(initial);

    let auth_screens = move || match screen.get() {
        AuthScreen::SignIn => view! {
            <LoginPage on_register=Callback::new(move |_| screen.set(AuthScreen::Register)) />
        }
        .into_any(),
        AuthScreen::Register => view! {
            <RegisterPage on_back=Callback::new(move |_| screen.set(AuthScreen::SignIn)) />
        }
        .into_any(),
    };

    view! {
        <Show when=move || auth_state.with(|s| s.is_authenticated()) fallback=auth_screens>
            <MainLayout />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_path_opens_registration() {
        assert_eq!(AuthScreen::from_path("/register"), AuthScreen::Register);
        assert_eq!(AuthScreen::from_path("/register/"), AuthScreen::Register);
        assert_eq!(AuthScreen::from_path("/signin"), AuthScreen::SignIn);
        assert_eq!(AuthScreen::from_path("/"), AuthScreen::SignIn);
    }
}

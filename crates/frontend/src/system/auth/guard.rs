use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only for administrators.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=|| view! { <div class="alert alert--warning">"Acceso restringido a administradores."</div> }
        >
            {children()}
        </Show>
    }
}

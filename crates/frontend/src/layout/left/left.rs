use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar column; collapsed from the header toggle.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--hidden=move || !is_open()>
            {children()}
        </aside>
    }
}

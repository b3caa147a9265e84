//! Root wrapper for every page rendered inside a tab.
//!
//! The root element carries `id="{entity}--{category}"` and
//! `data-page-category`, so a DOM id copied from the inspector leads straight
//! to the module that renders it.

use leptos::prelude::*;

/// Table with search and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Read-only report with filters and CSV export.
pub const PAGE_CAT_REPORT: &str = "report";
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// Administration pages (users, logs).
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// e.g. `"a001_asset--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

/// Title row of a page: title, row-count badge and action buttons.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] count: Option<Signal<usize>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {count.map(|count| view! { <thaw::Badge>{move || count.get().to_string()}</thaw::Badge> })}
            </div>
            <div class="page__header-right">{children.map(|c| c())}</div>
        </div>
    }
}

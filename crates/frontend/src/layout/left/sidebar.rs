//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "assets",
            label: "Bienes",
            icon: "box",
            items: vec![
                ("a001_asset", "box"),
                ("a002_component", "cpu"),
                ("a012_component_transfer", "swap"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "movements",
            label: "Movimientos",
            icon: "swap",
            items: vec![
                ("a009_incorporation", "arrow-in"),
                ("a010_disposal", "arrow-out"),
                ("a011_missing_good", "alert"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "catalogs",
            label: "Catálogos",
            icon: "list",
            items: vec![
                ("a003_department", "building"),
                ("a004_brand", "tag"),
                ("a005_model", "tag"),
                ("a006_subgroup", "list"),
                ("a007_parish", "building"),
                ("a008_concept_incorporation", "arrow-in"),
                ("a008_concept_disposal", "arrow-out"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "reports",
            label: "Reportes",
            icon: "file",
            items: vec![("r_missing_goods", "alert"), ("r_exports", "download")],
            admin_only: false,
        },
        MenuGroup {
            id: "system",
            label: "Sistema",
            icon: "clipboard",
            items: vec![
                ("sys_users", "users"),
                ("sys_audit", "clipboard"),
                ("sys_logs", "file"),
            ],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_admin = auth_state.with_untracked(|state| state.is_admin());
    let groups: Vec<MenuGroup> = menu_groups()
        .into_iter()
        .filter(|g| !g.admin_only || is_admin)
        .collect();

    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());
    let toggle_group = move |id: &'static str| {
        expanded_groups.update(|open| {
            if let Some(pos) = open.iter().position(|g| *g == id) {
                open.remove(pos);
            } else {
                open.push(id);
            }
        })
    };
    let is_active = move |key: &'static str| ctx.active.with(|a| a.as_deref() == Some(key));

    view! {
        <nav class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active("dashboard")
                on:click=move |_| ctx.open_tab("dashboard", tab_label_for_key("dashboard"))
            >
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>{tab_label_for_key("dashboard")}</span>
                </div>
            </div>

            {groups
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    view! {
                        <div>
                            <div class="app-sidebar__item" on:click=move |_| toggle_group(group_id)>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.with(|open| open.contains(&group_id))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.with(|open| open.contains(&group_id))>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .iter()
                                        .map(|&(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || is_active(key)
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_entry_has_a_tab_label() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
            }
        }
    }

    #[test]
    fn only_system_group_is_admin_only() {
        let admin: Vec<&str> = menu_groups()
            .into_iter()
            .filter(|g| g.admin_only)
            .map(|g| g.id)
            .collect();
        assert_eq!(admin, vec!["system"]);
    }
}

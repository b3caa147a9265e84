//! Tab content registry: maps tab.key → View. Every tab key is handled here.

use crate::dashboards::overview::OverviewDashboard;
use crate::domain::a001_asset::ui::list::AssetList;
use crate::domain::a002_component::ui::list::ComponentList;
use crate::domain::a003_department::ui::DepartmentList;
use crate::domain::a004_brand::ui::BrandList;
use crate::domain::a005_model::ui::ModelList;
use crate::domain::a006_subgroup::ui::SubgroupList;
use crate::domain::a007_parish::ui::ParishList;
use crate::domain::a008_movement_concept::ui::{DisposalConceptList, IncorporationConceptList};
use crate::domain::a009_incorporation::ui::IncorporationList;
use crate::domain::a010_disposal::ui::DisposalList;
use crate::domain::a011_missing_good::ui::MissingGoodList;
use crate::domain::a012_component_transfer::ui::TransferHistoryList;
use crate::reports::exports::ExportsPage;
use crate::reports::missing_goods::MissingGoodsReport;
use crate::system::audit::ui::AuditReport;
use crate::system::logs::ui::SystemLogsPage;
use crate::system::notifications::ui::NotificationsPage;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

/// Renders the content of the tab with the given key; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <OverviewDashboard /> }.into_any(),

        // Bienes
        "a001_asset" => view! { <AssetList /> }.into_any(),
        "a002_component" => view! { <ComponentList /> }.into_any(),
        "a012_component_transfer" => view! { <TransferHistoryList /> }.into_any(),

        // Catálogos
        "a003_department" => view! { <DepartmentList /> }.into_any(),
        "a004_brand" => view! { <BrandList /> }.into_any(),
        "a005_model" => view! { <ModelList /> }.into_any(),
        "a006_subgroup" => view! { <SubgroupList /> }.into_any(),
        "a007_parish" => view! { <ParishList /> }.into_any(),
        "a008_concept_incorporation" => view! { <IncorporationConceptList /> }.into_any(),
        "a008_concept_disposal" => view! { <DisposalConceptList /> }.into_any(),

        // Movimientos
        "a009_incorporation" => view! { <IncorporationList /> }.into_any(),
        "a010_disposal" => view! { <DisposalList /> }.into_any(),
        "a011_missing_good" => view! { <MissingGoodList /> }.into_any(),

        // Reportes
        "r_missing_goods" => view! { <MissingGoodsReport /> }.into_any(),
        "r_exports" => view! { <ExportsPage /> }.into_any(),

        // Sistema
        "notifications" => view! { <NotificationsPage /> }.into_any(),
        "sys_audit" => view! { <AuditReport /> }.into_any(),
        "sys_logs" => view! { <SystemLogsPage /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Página no disponible"</div> }.into_any()
        }
    }
}

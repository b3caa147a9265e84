//! Landing tab: headline counts, each card opening the matching list.

use contracts::domain::a001_asset::aggregate::{Asset, AssetStatus};
use contracts::domain::a002_component::aggregate::Component;
use contracts::domain::a011_missing_good::aggregate::{MissingGood, MissingGoodsSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a002_component::api::fetch_components;
use crate::domain::a011_missing_good::api::fetch_missing_goods;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title;
use crate::shared::icons::icon;
use crate::shared::number_utils::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DASHBOARD};
use crate::system::notifications::use_notifications;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssetTotals {
    pub count: usize,
    pub active: usize,
    pub missing: usize,
    pub value: f64,
}

impl AssetTotals {
    pub fn from_assets(assets: &[Asset]) -> Self {
        assets.iter().fold(Self::default(), |acc, a| Self {
            count: acc.count + 1,
            active: acc.active + usize::from(a.status == AssetStatus::Active),
            missing: acc.missing + usize::from(a.status == AssetStatus::Missing),
            value: acc.value + a.total(),
        })
    }
}

/// `(installed, in stock)`
pub fn component_split(components: &[Component]) -> (usize, usize) {
    let free = components.iter().filter(|c| c.is_free()).count();
    (components.len() - free, free)
}

#[component]
fn StatCard(
    title: &'static str,
    icon_name: &'static str,
    tab_key: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] detail: Signal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    view! {
        <div
            class="stat-card"
            on:click=move |_| ctx.open_tab(tab_key, &tab_title(tab_key))
        >
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__title">{title}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__detail">{move || detail.get()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let assets: RwSignal<Option<Vec<Asset>>> = RwSignal::new(None);
    let components: RwSignal<Option<Vec<Component>>> = RwSignal::new(None);
    let missing: RwSignal<Option<Vec<MissingGood>>> = RwSignal::new(None);

    let load = move || {
        spawn_local(async move {
            match fetch_assets().await {
                Ok(list) => assets.set(Some(list)),
                Err(e) => log::error!("Dashboard: assets unavailable: {}", e),
            }
        });
        spawn_local(async move {
            match fetch_components().await {
                Ok(list) => components.set(Some(list)),
                Err(e) => log::error!("Dashboard: components unavailable: {}", e),
            }
        });
        spawn_local(async move {
            match fetch_missing_goods().await {
                Ok(list) => missing.set(Some(list)),
                Err(e) => log::error!("Dashboard: missing goods unavailable: {}", e),
            }
        });
        notifications.refresh();
    };
    Effect::new(move |_| load());

    let asset_totals = Signal::derive(move || {
        assets.with(|a| a.as_deref().map(AssetTotals::from_assets))
    });
    let split = Signal::derive(move || components.with(|c| c.as_deref().map(component_split)));
    let shortfall = Signal::derive(move || {
        missing.with(|m| m.as_deref().map(MissingGoodsSummary::from_rows))
    });

    let pending = || "…".to_string();

    view! {
        <PageFrame page_id="dashboard--overview" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Resumen">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>
            <div class="stat-grid">
                <StatCard
                    title="Bienes"
                    icon_name="box"
                    tab_key="a001_asset"
                    value=Signal::derive(move || {
                        asset_totals.get().map(|t| t.count.to_string()).unwrap_or_else(pending)
                    })
                    detail=Signal::derive(move || {
                        asset_totals
                            .get()
                            .map(|t| format!("{} activos · {}", t.active, format_money(t.value)))
                            .unwrap_or_default()
                    })
                />
                <StatCard
                    title="Componentes"
                    icon_name="cpu"
                    tab_key="a002_component"
                    value=Signal::derive(move || {
                        split.get().map(|(i, f)| (i + f).to_string()).unwrap_or_else(pending)
                    })
                    detail=Signal::derive(move || {
                        split
                            .get()
                            .map(|(i, f)| format!("{} instalados · {} en almacén", i, f))
                            .unwrap_or_default()
                    })
                />
                <StatCard
                    title="Bienes faltantes"
                    icon_name="alert"
                    tab_key="r_missing_goods"
                    value=Signal::derive(move || {
                        shortfall.get().map(|s| s.lines.to_string()).unwrap_or_else(pending)
                    })
                    detail=Signal::derive(move || {
                        shortfall
                            .get()
                            .map(|s| format!("{} unidades · {}", s.missing_units, format_money(s.missing_value)))
                            .unwrap_or_default()
                    })
                />
                <StatCard
                    title="Notificaciones sin leer"
                    icon_name="bell"
                    tab_key="notifications"
                    value=Signal::derive(move || notifications.unread().to_string())
                    detail=Signal::derive(move || {
                        notifications.items.with(|n| format!("{} en total", n.len()))
                    })
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_asset::aggregate::AssetCategory;

    fn asset(status: AssetStatus, quantity: i32, unit_value: f64) -> Asset {
        Asset {
            id: 1,
            code: "BN-1".into(),
            description: "Archivador".into(),
            category: AssetCategory::Furniture,
            status,
            quantity,
            unit_value,
            total_value: None,
            serial: None,
            department_id: 1,
            department_name: None,
            subgroup_id: 1,
            subgroup_name: None,
            brand_id: None,
            model_id: None,
            parish_id: None,
            acquired_at: None,
            observations: None,
        }
    }

    #[test]
    fn asset_totals() {
        let totals = AssetTotals::from_assets(&[
            asset(AssetStatus::Active, 2, 10.0),
            asset(AssetStatus::Missing, 1, 5.0),
            asset(AssetStatus::Disposed, 1, 1.0),
        ]);
        assert_eq!(totals.count, 3);
        assert_eq!(totals.active, 1);
        assert_eq!(totals.missing, 1);
        assert_eq!(totals.value, 26.0);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(AssetTotals::from_assets(&[]), AssetTotals::default());
        assert_eq!(component_split(&[]), (0, 0));
    }
}

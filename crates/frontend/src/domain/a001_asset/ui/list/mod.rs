use contracts::domain::a001_asset::aggregate::{Asset, AssetCategory, AssetStatus};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a001_asset::api;
use crate::domain::a001_asset::ui::details::AssetDetails;
use crate::reports::exports::{download_qr_labels, toggle_selection};
use crate::shared::components::confirm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::number_utils::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

fn status_badge_class(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "badge badge--success",
        AssetStatus::Disposed => "badge badge--neutral",
        AssetStatus::Missing => "badge badge--error",
    }
}

fn in_category(rows: Vec<Asset>, category: Option<AssetCategory>) -> Vec<Asset> {
    match category {
        Some(category) => rows.into_iter().filter(|a| a.category == category).collect(),
        None => rows,
    }
}

#[component]
pub fn AssetList() -> impl IntoView {
    let state = ListState::<Asset>::new();
    let category = RwSignal::new(None::<AssetCategory>);
    let selected: RwSignal<Vec<EntityId>> = RwSignal::new(Vec::new());
    let printing = RwSignal::new(false);
    let modals = use_modal_stack();
    let toast = use_toast();

    let reload = move || state.load("los bienes", api::fetch_assets);
    Effect::new(move |_| reload());

    let open_details = move |id: Option<EntityId>| {
        modals.push_with_frame(Some("max-width: 900px;".into()), None, move |handle| {
            let on_saved = Callback::new(move |_| {
                toast.success("Bien guardado");
                handle.close();
                reload();
            });
            view! { <AssetDetails id=id on_saved=on_saved on_close=handle.close_callback() /> }
                .into_any()
        });
    };

    let remove = move |id: EntityId| {
        if !confirm("¿Eliminar este bien? Se perderá su historial de componentes.") {
            return;
        }
        spawn_local(async move {
            match api::delete_asset(id).await {
                Ok(()) => {
                    selected.update(|s| s.retain(|x| *x != id));
                    toast.success("Bien eliminado");
                    reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let print_labels = move || {
        let ids = selected.get_untracked();
        printing.set(true);
        spawn_local(async move {
            match download_qr_labels(ids).await {
                Ok(file_name) => toast.success(format!("Descargado {}", file_name)),
                Err(e) => toast.error(e.to_string()),
            }
            printing.set(false);
        });
    };

    let page = Signal::derive(move || {
        let rows = in_category(state.filtered(), category.get());
        state.page_of(&rows)
    });
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="a001_asset--list" category=PAGE_CAT_LIST>
            <PageHeader title="Bienes muebles" count=count>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " Nuevo"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| print_labels()
                    disabled=Signal::derive(move || printing.get() || selected.with(|s| s.is_empty()))
                >
                    {icon("qr")}
                    {move || format!(" Etiquetas QR ({})", selected.with(|s| s.len()))}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=Signal::derive(move || state.loading.get())
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                {error_box(state.error)}

                <div class="filter-panel">
                    <SearchInput
                        placeholder="Número, descripción, serial o departamento..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
                    <select
                        class="form__select form__select--compact"
                        on:change=move |ev| {
                            let key = event_target_value(&ev);
                            category.set((!key.is_empty()).then(|| AssetCategory::from_key(&key)));
                            state.page.set(0);
                        }
                    >
                        <option value="">"Todas las categorías"</option>
                        {AssetCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_key()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                    <PaginationControls
                        current_page=Signal::derive(move || page.with(|p| p.page))
                        total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                        total_count=count
                        on_page_change=Callback::new(move |p| state.page.set(p))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>""</TableHeaderCell>
                                <TableHeaderCell>"Número"</TableHeaderCell>
                                <TableHeaderCell>"Descripción"</TableHeaderCell>
                                <TableHeaderCell>"Categoría"</TableHeaderCell>
                                <TableHeaderCell>"Departamento"</TableHeaderCell>
                                <TableHeaderCell>"Cant."</TableHeaderCell>
                                <TableHeaderCell>"Valor total"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|a| a.id
                                children=move |a| {
                                    let id = a.id;
                                    let code = a.code.clone();
                                    let description = a.description.clone();
                                    let category = a.category.label();
                                    let department = a.department_name.clone().unwrap_or_default();
                                    let quantity = a.quantity;
                                    let total = format_money(a.total());
                                    let status_class = status_badge_class(a.status);
                                    let status = a.status.label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || selected.with(|s| s.contains(&id))
                                                    on:change=move |_| selected.update(|s| toggle_selection(s, id))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            open_details(Some(id));
                                                        }
                                                    >
                                                        {code}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {department}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="row-actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_details(Some(id))
                                                        attr:title="Editar"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| remove(id)
                                                        attr:title="Eliminar"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {empty_state(count, state.loading)}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: EntityId, category: AssetCategory) -> Asset {
        Asset {
            id,
            code: format!("BN-{}", id),
            description: "Bien".into(),
            category,
            status: AssetStatus::Active,
            quantity: 1,
            unit_value: 1.0,
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
    fn category_filter() {
        let rows = vec![
            asset(1, AssetCategory::Computer),
            asset(2, AssetCategory::Furniture),
            asset(3, AssetCategory::Computer),
        ];
        let computers = in_category(rows.clone(), Some(AssetCategory::Computer));
        assert_eq!(computers.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(in_category(rows, None).len(), 3);
    }

    #[test]
    fn missing_assets_are_flagged() {
        assert_eq!(status_badge_class(AssetStatus::Missing), "badge badge--error");
        assert_eq!(status_badge_class(AssetStatus::Active), "badge badge--success");
    }
}

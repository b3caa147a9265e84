use contracts::domain::a012_component_transfer::aggregate::ComponentTransfer;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};

fn asset_ref(code: &Option<String>, id: Option<i64>) -> String {
    match (code, id) {
        (Some(code), _) => code.clone(),
        (None, Some(id)) => format!("#{}", id),
        (None, None) => "Almacén".to_string(),
    }
}

/// History of component moves, newest first as served by the API.
#[component]
pub fn TransferHistoryList() -> impl IntoView {
    let state = ListState::<ComponentTransfer>::new();

    let reload = move || state.load("los traslados", api::fetch_transfers);
    Effect::new(move |_| reload());

    let page = Signal::derive(move || state.visible());
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="a012_component_transfer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Traslados de componentes" count=count>
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
                        placeholder="Componente, equipo, motivo..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
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
                                <TableHeaderCell>"Fecha"</TableHeaderCell>
                                <TableHeaderCell>"Componente"</TableHeaderCell>
                                <TableHeaderCell>"Desde"</TableHeaderCell>
                                <TableHeaderCell>"Hacia"</TableHeaderCell>
                                <TableHeaderCell>"Motivo"</TableHeaderCell>
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|t| t.id
                                children=move |t| {
                                    let component = t
                                        .component_name
                                        .clone()
                                        .unwrap_or_else(|| format!("#{}", t.component_id));
                                    let transferred_at = format_datetime(&t.transferred_at);
                                    let from = asset_ref(&t.from_asset_code, t.from_asset_id);
                                    let to = asset_ref(&t.to_asset_code, t.to_asset_id);
                                    let reason = t.reason.clone();
                                    let user = t.user.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{transferred_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{component}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{from}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{to}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{reason}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{user}</TableCellLayout>
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

    #[test]
    fn asset_reference_prefers_code() {
        assert_eq!(asset_ref(&Some("PC-3".into()), Some(3)), "PC-3");
        assert_eq!(asset_ref(&None, Some(3)), "#3");
        assert_eq!(asset_ref(&None, None), "Almacén");
    }
}

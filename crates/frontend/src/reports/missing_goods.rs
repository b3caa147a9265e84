use contracts::domain::a011_missing_good::aggregate::{MissingGood, MissingGoodsSummary};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a003_department::api::fetch_departments;
use crate::domain::a011_missing_good::api::fetch_missing_goods;
use crate::shared::components::form_fields::{id_select, load_options};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::number_utils::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;

impl CsvExportable for MissingGood {
    fn headers() -> Vec<&'static str> {
        vec![
            "Fecha",
            "Número de bien",
            "Descripción",
            "Departamento",
            "Registrado",
            "Verificado",
            "Faltante",
            "Valor unitario",
            "Valor faltante",
            "Funcionario",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.reported_at),
            self.asset_code.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
            self.department_name.clone().unwrap_or_default(),
            self.recorded_quantity.to_string(),
            self.verified_quantity.to_string(),
            self.missing_units().to_string(),
            format!("{:.2}", self.unit_value),
            format!("{:.2}", self.missing_value()),
            self.official.clone().unwrap_or_default(),
        ]
    }
}

fn in_department(rows: &[MissingGood], department: Option<EntityId>) -> Vec<MissingGood> {
    match department {
        Some(id) => rows.iter().filter(|r| r.department_id == id).cloned().collect(),
        None => rows.to_vec(),
    }
}

/// Shortfalls per department with totals; the same rows the BM-3 form lists.
#[component]
pub fn MissingGoodsReport() -> impl IntoView {
    let state = ListState::<MissingGood>::new();
    let department = RwSignal::new(None::<EntityId>);
    let departments = load_options(fetch_departments);
    let toast = use_toast();

    let load_data = move || state.load("los bienes faltantes", fetch_missing_goods);
    Effect::new(move |_| load_data());

    let rows = Signal::derive(move || in_department(&state.filtered(), department.get()));
    let summary = Signal::derive(move || rows.with(|r| MissingGoodsSummary::from_rows(r)));
    let page = Signal::derive(move || rows.with(|r| state.page_of(r)));
    let count = Signal::derive(move || page.with(|p| p.total_count));

    Effect::new(move |_| {
        department.track();
        state.page.set(0);
    });

    let export = move |_| {
        let data = rows.get_untracked();
        if let Err(e) = export_csv(&data, "bienes_faltantes.csv") {
            toast.error(e.to_string());
        }
    };

    view! {
        <PageFrame page_id="r_missing_goods--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Reporte de bienes faltantes" count=count>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    " Exportar CSV"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
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
                        placeholder="Bien, departamento o funcionario..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
                    {id_select(departments, department, "Todos los departamentos")}
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
                                <TableHeaderCell>"Bien"</TableHeaderCell>
                                <TableHeaderCell>"Departamento"</TableHeaderCell>
                                <TableHeaderCell>"Faltante"</TableHeaderCell>
                                <TableHeaderCell>"Valor unitario"</TableHeaderCell>
                                <TableHeaderCell>"Valor faltante"</TableHeaderCell>
                                <TableHeaderCell>"Funcionario"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|m| m.id
                                children=move |m| {
                                    let asset = m
                                        .asset_code
                                        .clone()
                                        .unwrap_or_else(|| format!("#{}", m.asset_id));
                                    let reported_at = format_date(&m.reported_at);
                                    let description = m.description.clone().unwrap_or_default();
                                    let department = m.department_name.clone().unwrap_or_default();
                                    let missing_units = m.missing_units();
                                    let unit_value = format_money(m.unit_value);
                                    let missing_value = format_money(m.missing_value());
                                    let official = m.official.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{reported_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{asset}</span>
                                                    " "
                                                    {description}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {department}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{missing_units}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{unit_value}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{missing_value}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {official}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {empty_state(count, state.loading)}
                </div>

                <div class="report-summary">
                    <span>{move || format!("Registros: {}", summary.get().lines)}</span>
                    <span>{move || format!("Unidades faltantes: {}", summary.get().missing_units)}</span>
                    <span class="report-summary__total">
                        {move || format!("Valor total faltante: {}", format_money(summary.get().missing_value))}
                    </span>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: EntityId, department_id: EntityId) -> MissingGood {
        MissingGood {
            id,
            asset_id: id,
            asset_code: Some(format!("BN-{}", id)),
            description: Some("Silla; giratoria".into()),
            department_id,
            department_name: None,
            recorded_quantity: 4,
            verified_quantity: 1,
            difference: None,
            unit_value: 12.5,
            official: None,
            reported_at: "2024-05-02".into(),
            observations: None,
        }
    }

    #[test]
    fn department_filter() {
        let rows = vec![row(1, 1), row(2, 2), row(3, 1)];
        assert_eq!(in_department(&rows, Some(1)).len(), 2);
        assert_eq!(in_department(&rows, None).len(), 3);
    }

    #[test]
    fn csv_row_carries_computed_columns() {
        let cells = row(1, 1).to_csv_row();
        assert_eq!(cells.len(), MissingGood::headers().len());
        assert_eq!(cells[0], "02/05/2024");
        assert_eq!(cells[6], "3");
        assert_eq!(cells[8], "37.50");
    }
}

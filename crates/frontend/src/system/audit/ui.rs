use chrono::NaiveDate;
use contracts::system::audit::{distinct_actions, distinct_users, AuditEntry, AuditFilter};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RequireAdmin;

impl CsvExportable for AuditEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Fecha", "Usuario", "Acción", "Entidad", "ID", "Detalle"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_datetime(&self.created_at),
            self.user.clone().unwrap_or_default(),
            self.action.clone(),
            self.entity.clone(),
            self.entity_id.map(|id| id.to_string()).unwrap_or_default(),
            self.detail.clone().unwrap_or_default(),
        ]
    }
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[component]
pub fn AuditReport() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AuditTrail />
        </RequireAdmin>
    }
}

#[component]
fn AuditTrail() -> impl IntoView {
    let state = ListState::<AuditEntry>::new();
    let user = RwSignal::new(String::new());
    let action = RwSignal::new(String::new());
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let toast = use_toast();

    let load_data = move || state.load("los registros de auditoría", api::fetch_audit);
    Effect::new(move |_| load_data());

    let filter = Signal::derive(move || AuditFilter {
        text: state.query.get(),
        user: Some(user.get()).filter(|u| !u.is_empty()),
        action: Some(action.get()).filter(|a| !a.is_empty()),
        from: parse_day(&from.get()),
        to: parse_day(&to.get()),
    });
    let rows = Signal::derive(move || state.all.with(|all| filter.with(|f| f.apply(all))));
    let actions = Signal::derive(move || state.all.with(|all| distinct_actions(all)));
    let users = Signal::derive(move || state.all.with(|all| distinct_users(all)));

    let page = Signal::derive(move || rows.with(|r| state.page_of(r)));
    let count = Signal::derive(move || page.with(|p| p.total_count));

    // any filter change goes back to the first page
    Effect::new(move |_| {
        user.track();
        action.track();
        from.track();
        to.track();
        state.page.set(0);
    });

    let export = move |_| {
        let data = rows.get_untracked();
        if let Err(e) = export_csv(&data, "auditoria.csv") {
            toast.error(e.to_string());
        }
    };

    view! {
        <PageFrame page_id="sys_audit--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Auditoría" count=count>
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
                        placeholder="Usuario, entidad o detalle..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
                    <select
                        class="form__select form__select--compact"
                        prop:value=move || user.get()
                        on:change=move |ev| user.set(event_target_value(&ev))
                    >
                        <option value="">"Todos los usuarios"</option>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|u| {
                                    let value = u.clone();
                                    view! { <option value=value>{u}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <select
                        class="form__select form__select--compact"
                        prop:value=move || action.get()
                        on:change=move |ev| action.set(event_target_value(&ev))
                    >
                        <option value="">"Todas las acciones"</option>
                        {move || {
                            actions
                                .get()
                                .into_iter()
                                .map(|a| {
                                    let value = a.clone();
                                    view! { <option value=value>{a}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                    <label class="form__label form__label--inline">"Desde"</label>
                    <input
                        type="date"
                        class="form__input form__input--compact"
                        prop:value=move || from.get()
                        on:input=move |ev| from.set(event_target_value(&ev))
                    />
                    <label class="form__label form__label--inline">"Hasta"</label>
                    <input
                        type="date"
                        class="form__input form__input--compact"
                        prop:value=move || to.get()
                        on:input=move |ev| to.set(event_target_value(&ev))
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
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                                <TableHeaderCell>"Acción"</TableHeaderCell>
                                <TableHeaderCell>"Entidad"</TableHeaderCell>
                                <TableHeaderCell>"Detalle"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|e| e.id
                                children=move |entry| {
                                    let entity = match entry.entity_id {
                                        Some(id) => format!("{} #{}", entry.entity, id),
                                        None => entry.entity.clone(),
                                    };
                                    let created_at = format_datetime(&entry.created_at);
                                    let author = entry.user.clone().unwrap_or_else(|| "-".into());
                                    let action_name = entry.action.clone();
                                    let detail = entry.detail.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{created_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {author}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{action_name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{entity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {detail}
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
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_row_follows_headers() {
        let entry = AuditEntry {
            id: 1,
            user: Some("admin".into()),
            action: "UPDATE".into(),
            entity: "furniture".into(),
            entity_id: Some(9),
            detail: None,
            created_at: "2024-02-01T08:30:00Z".into(),
        };
        let row = entry.to_csv_row();
        assert_eq!(row.len(), AuditEntry::headers().len());
        assert_eq!(row[0], "01/02/2024 08:30:00");
        assert_eq!(row[4], "9");
        assert_eq!(row[5], "");
    }

    #[test]
    fn blank_or_malformed_dates_do_not_filter() {
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("01/02/2024"), None);
        assert_eq!(parse_day("2024-02-01"), NaiveDate::from_ymd_opt(2024, 2, 1));
    }
}

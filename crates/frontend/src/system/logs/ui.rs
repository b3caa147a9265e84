use contracts::shared::logger::SystemLogEntry;
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
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_SYSTEM};
use crate::system::auth::guard::RequireAdmin;

fn level_class(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "error" => "badge badge--error",
        "warn" | "warning" => "badge badge--warning",
        "debug" | "trace" => "badge badge--neutral",
        _ => "badge badge--info",
    }
}

#[component]
pub fn SystemLogsPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <SystemLogs />
        </RequireAdmin>
    }
}

#[component]
fn SystemLogs() -> impl IntoView {
    let state = ListState::<SystemLogEntry>::new();
    let errors_only = RwSignal::new(false);

    let load_data = move || state.load("los registros del sistema", api::fetch_logs);
    Effect::new(move |_| load_data());

    let page = Signal::derive(move || {
        let mut rows = state.filtered();
        if errors_only.get() {
            rows.retain(SystemLogEntry::is_error);
        }
        state.page_of(&rows)
    });
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="sys_logs--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Registros del sistema" count=count>
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
                        placeholder="Nivel, origen o mensaje..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || errors_only.get()
                            on:change=move |ev| {
                                errors_only.set(event_target_checked(&ev));
                                state.page.set(0);
                            }
                        />
                        " Solo errores"
                    </label>
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
                                <TableHeaderCell>"Nivel"</TableHeaderCell>
                                <TableHeaderCell>"Origen"</TableHeaderCell>
                                <TableHeaderCell>"Mensaje"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|e| e.id
                                children=move |entry| {
                                    let timestamp = format_datetime(&entry.timestamp);
                                    let class = level_class(&entry.level);
                                    let level = entry.level.to_uppercase();
                                    let source = entry.source.clone();
                                    let message = entry.message.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{timestamp}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=class>{level}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{source}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{message}</TableCellLayout>
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
    fn levels_map_to_badges() {
        assert_eq!(level_class("ERROR"), "badge badge--error");
        assert_eq!(level_class("warning"), "badge badge--warning");
        assert_eq!(level_class("info"), "badge badge--info");
        assert_eq!(level_class("whatever"), "badge badge--info");
    }
}

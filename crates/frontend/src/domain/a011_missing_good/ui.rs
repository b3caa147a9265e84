use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a011_missing_good::aggregate::{MissingGood, MissingGoodDto};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::api;
use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a003_department::api::fetch_departments;
use crate::shared::components::confirm;
use crate::shared::components::form_fields::{
    catalog_options, date_field, int_field, load_options, opt_text_field, select_field,
    textarea_field,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::number_utils::format_money;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

#[component]
pub fn MissingGoodList() -> impl IntoView {
    let state = ListState::<MissingGood>::new();
    let modals = use_modal_stack();
    let toast = use_toast();

    let reload = move || state.load("los bienes faltantes", api::fetch_missing_goods);
    Effect::new(move |_| reload());

    let open_form = move || {
        modals.push_with_frame(Some("max-width: 640px;".into()), None, move |handle| {
            missing_good_form(handle, Callback::new(move |_| reload()))
        });
    };

    let remove = move |id: EntityId| {
        if !confirm("¿Eliminar este registro de bien faltante?") {
            return;
        }
        spawn_local(async move {
            match api::delete_missing_good(id).await {
                Ok(()) => {
                    toast.success("Registro eliminado");
                    reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let page = Signal::derive(move || state.visible());
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="a011_missing_good--list" category=PAGE_CAT_LIST>
            <PageHeader title="Bienes faltantes" count=count>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form()>
                    {icon("plus")}
                    " Registrar faltante"
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
                        placeholder="Bien, departamento o funcionario..."
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
                                <TableHeaderCell>"Bien"</TableHeaderCell>
                                <TableHeaderCell>"Departamento"</TableHeaderCell>
                                <TableHeaderCell>"Registrado"</TableHeaderCell>
                                <TableHeaderCell>"Verificado"</TableHeaderCell>
                                <TableHeaderCell>"Faltante"</TableHeaderCell>
                                <TableHeaderCell>"Valor faltante"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|m| m.id
                                children=move |m| {
                                    let id = m.id;
                                    let asset = match (&m.asset_code, &m.description) {
                                        (Some(code), Some(desc)) => format!("{} - {}", code, desc),
                                        (Some(code), None) => code.clone(),
                                        _ => format!("#{}", m.asset_id),
                                    };
                                    let reported_at = format_date(&m.reported_at);
                                    let department = m.department_name.clone().unwrap_or_default();
                                    let recorded = m.recorded_quantity;
                                    let verified = m.verified_quantity;
                                    let missing_units = m.missing_units();
                                    let missing_value = format_money(m.missing_value());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{reported_at}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{asset}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {department}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{recorded}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{verified}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--error">{missing_units}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{missing_value}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| remove(id)
                                                    attr:title="Eliminar"
                                                >
                                                    {icon("trash")}
                                                </Button>
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

fn missing_good_form(handle: ModalHandle, on_saved: Callback<()>) -> AnyView {
    let toast = use_toast();
    let form = RwSignal::new(MissingGoodDto::new(&today_iso()));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let assets: RwSignal<Vec<Asset>> = RwSignal::new(Vec::new());
    let departments = load_options(fetch_departments);
    spawn_local(async move {
        if let Ok(list) = fetch_assets().await {
            assets.set(list);
        }
    });
    let asset_options = Signal::derive(move || assets.with(|a| catalog_options(a)));

    // picking an asset proposes its department and recorded quantity
    let picked = Memo::new(move |_| form.with(|f| f.asset_id));
    Effect::new(move |_| {
        let Some(asset_id) = picked.get() else {
            return;
        };
        let found = assets.with(|list| {
            list.iter()
                .find(|a| a.id == asset_id)
                .map(|a| (a.department_id, a.quantity))
        });
        if let Some((department_id, quantity)) = found {
            form.update(|f| {
                f.department_id = Some(department_id);
                f.recorded_quantity = quantity;
            });
        }
    });

    let save = move || {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let dto = dto.normalized();
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::create_missing_good(&dto).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success("Faltante registrado");
                    handle.close();
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader title="Registrar bien faltante" on_close=handle.close_callback() />
            {error_box(error)}
            <div class="details-form">
                {select_field("Bien", form, asset_options, |f| f.asset_id, |f, v| f.asset_id = v)}
                {select_field("Departamento", form, departments, |f| f.department_id, |f, v| f.department_id = v)}
                {int_field("Cantidad registrada", form, |f| f.recorded_quantity, |f, v| f.recorded_quantity = v)}
                {int_field("Cantidad verificada", form, |f| f.verified_quantity, |f, v| f.verified_quantity = v)}
                {opt_text_field("Funcionario responsable", form, |f| f.official.clone(), |f, v| f.official = v)}
                {date_field("Fecha del reporte", form, |f| f.reported_at.clone(), |f, v| f.reported_at = v)}
                {textarea_field("Observaciones", form, |f| f.observations.clone(), |f, v| f.observations = v)}
            </div>
            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || saving.get())
                >
                    {icon("check")}
                    " Guardar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| handle.close()>
                    "Cancelar"
                </Button>
            </div>
        </div>
    }
    .into_any()
}

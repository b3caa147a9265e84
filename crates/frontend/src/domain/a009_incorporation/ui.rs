//! Movement book screen: list of incorporations (or disposals) and the
//! modal that records a new one.

use contracts::domain::a008_movement_concept::aggregate::ConceptKind;
use contracts::domain::a009_incorporation::aggregate::{Movement, MovementDto, ENDPOINT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::api;
use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a003_department::api::fetch_departments;
use crate::domain::a008_movement_concept::api::fetch_concepts;
use crate::shared::components::form_fields::{
    date_field, int_field, load_options, money_field, select_field, textarea_field,
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

pub struct MovementBook {
    pub page_id: &'static str,
    pub title: &'static str,
    /// Title of the create modal
    pub new_title: &'static str,
    pub endpoint: &'static str,
    pub concepts: ConceptKind,
}

static INCORPORATIONS: MovementBook = MovementBook {
    page_id: "a009_incorporation--list",
    title: "Incorporaciones",
    new_title: "Nueva incorporación",
    endpoint: ENDPOINT,
    concepts: ConceptKind::Incorporation,
};

#[component]
pub fn IncorporationList() -> impl IntoView {
    movement_list(&INCORPORATIONS)
}

pub fn movement_list(book: &'static MovementBook) -> AnyView {
    let state = ListState::<Movement>::new();
    let modals = use_modal_stack();

    let reload = move || state.load(book.title, move || api::fetch_movements(book.endpoint));
    Effect::new(move |_| reload());

    let open_form = move || {
        modals.push_with_frame(Some("max-width: 640px;".into()), None, move |handle| {
            movement_form(book, handle, Callback::new(move |_| reload()))
        });
    };

    let page = Signal::derive(move || state.visible());
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id=book.page_id category=PAGE_CAT_LIST>
            <PageHeader title=book.title count=count>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form()>
                    {icon("plus")}
                    " Registrar"
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
                        placeholder="Bien, concepto o departamento..."
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
                                <TableHeaderCell>"Concepto"</TableHeaderCell>
                                <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                <TableHeaderCell>"Monto"</TableHeaderCell>
                                <TableHeaderCell>"Departamento"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|m| m.id
                                children=move |m| {
                                    let asset = match (&m.asset_code, &m.asset_description) {
                                        (Some(code), Some(desc)) => format!("{} - {}", code, desc),
                                        (Some(code), None) => code.clone(),
                                        _ => format!("#{}", m.asset_id),
                                    };
                                    let date = format_date(&m.date);
                                    let concept = m.concept_name.clone().unwrap_or_default();
                                    let quantity = m.quantity;
                                    let amount = format_money(m.amount);
                                    let department = m.department_name.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{date}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{asset}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {concept}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="text-right">{amount}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {department}
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
    .into_any()
}

fn movement_form(book: &'static MovementBook, handle: ModalHandle, on_saved: Callback<()>) -> AnyView {
    let toast = use_toast();
    let form = RwSignal::new(MovementDto::new(&today_iso()));
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let assets = load_options(fetch_assets);
    let concepts = load_options(move || fetch_concepts(book.concepts));
    let departments = load_options(fetch_departments);

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
            let result = api::create_movement(book.endpoint, &dto).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("{}: movement recorded for asset {:?}", book.title, dto.asset_id);
                    toast.success("Movimiento registrado");
                    handle.close();
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader title=book.new_title on_close=handle.close_callback() />
            {error_box(error)}
            <div class="details-form">
                {select_field("Bien", form, assets, |f| f.asset_id, |f, v| f.asset_id = v)}
                {select_field("Concepto", form, concepts, |f| f.concept_id, |f, v| f.concept_id = v)}
                {int_field("Cantidad", form, |f| f.quantity, |f, v| f.quantity = v)}
                {money_field("Monto", form, |f| f.amount, |f, v| f.amount = v)}
                {date_field("Fecha", form, |f| f.date.clone(), |f, v| f.date = v)}
                {select_field("Departamento", form, departments, |f| f.department_id, |f, v| f.department_id = v)}
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

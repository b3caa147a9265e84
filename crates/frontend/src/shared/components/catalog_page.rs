//! One list + form screen shared by the small reference catalogs (brands,
//! parishes, subgroups, departments, models, movement concepts).
//!
//! A catalog is described by a static `CatalogDef`; the page does the rest:
//! fetch on mount, search, pagination, create/edit modal and delete.

use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::Searchable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::confirm;
use super::pagination_controls::PaginationControls;
use crate::shared::api_utils::{delete, get_json, post_empty, put_empty};
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::modal_frame::ModalHeader;
use crate::shared::modal_stack::{use_modal_stack, ModalHandle};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

pub struct CatalogDef<R, D> {
    pub page_id: &'static str,
    pub title: &'static str,
    /// Singular noun for form titles and messages ("marca").
    pub noun: &'static str,
    pub endpoint: &'static str,
    pub columns: &'static [&'static str],
    pub cells: fn(&R) -> Vec<String>,
    pub id_of: fn(&R) -> EntityId,
    pub to_dto: fn(&R) -> D,
    pub new_dto: fn() -> D,
    /// Validates and returns the payload to send.
    pub prepare: fn(&D) -> Result<D, ApiError>,
    /// Form body; may load its own picker options.
    pub form: fn(RwSignal<D>) -> AnyView,
}

pub fn item_path(endpoint: &str, id: EntityId) -> String {
    format!("{}/{}", endpoint, id)
}

pub fn catalog_page<R, D>(catalog: &'static CatalogDef<R, D>) -> AnyView
where
    R: Clone + Searchable + DeserializeOwned + Send + Sync + 'static,
    D: Clone + Serialize + Send + Sync + 'static,
{
    let state = ListState::<R>::new();
    let modals = use_modal_stack();
    let toast = use_toast();

    let reload = move || state.load(catalog.title, move || get_json::<Vec<R>>(catalog.endpoint));
    Effect::new(move |_| reload());

    let open_form = move |id: Option<EntityId>, dto: D| {
        modals.push(move |handle| {
            catalog_form(catalog, handle, id, dto.clone(), Callback::new(move |_| reload()))
        });
    };

    let remove = move |id: EntityId| {
        if !confirm(&format!("¿Eliminar este registro de {}?", catalog.title.to_lowercase())) {
            return;
        }
        spawn_local(async move {
            match delete(&item_path(catalog.endpoint, id)).await {
                Ok(()) => {
                    toast.success(format!("{} eliminado(a)", capitalize(catalog.noun)));
                    reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let page = Signal::derive(move || state.visible());
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id=catalog.page_id category=PAGE_CAT_LIST>
            <PageHeader title=catalog.title count=count>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_form(None, (catalog.new_dto)())
                >
                    {icon("plus")}
                    " Nuevo"
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
                    <SearchInput on_change=Callback::new(move |q| state.set_query(q)) />
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
                                {catalog
                                    .columns
                                    .iter()
                                    .map(|c| view! { <TableHeaderCell>{*c}</TableHeaderCell> })
                                    .collect_view()}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=move |row| (catalog.id_of)(row)
                                children=move |row| {
                                    let id = (catalog.id_of)(&row);
                                    let dto = (catalog.to_dto)(&row);
                                    let cells = (catalog.cells)(&row);
                                    view! {
                                        <TableRow>
                                            {cells
                                                .into_iter()
                                                .map(|cell| {
                                                    view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view()}
                                            <TableCell>
                                                <div class="row-actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_form(Some(id), dto.clone())
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
    .into_any()
}

fn catalog_form<R, D>(
    catalog: &'static CatalogDef<R, D>,
    handle: ModalHandle,
    id: Option<EntityId>,
    dto: D,
    on_saved: Callback<()>,
) -> AnyView
where
    R: 'static,
    D: Clone + Serialize + Send + Sync + 'static,
{
    let toast = use_toast();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let title = match id {
        Some(_) => format!("Editar {}", catalog.noun),
        None => format!("Nuevo(a) {}", catalog.noun),
    };

    let save = move || {
        let payload = match (catalog.prepare)(&form.get_untracked()) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => put_empty(&item_path(catalog.endpoint, id), &payload).await,
                None => post_empty(catalog.endpoint, &payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toast.success(format!("{} guardado(a)", capitalize(catalog.noun)));
                    handle.close();
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="details-container">
            <ModalHeader title=title on_close=handle.close_callback() />
            {error_box(error)}
            <div class="details-form">{(catalog.form)(form)}</div>
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

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("marca"), "Marca");
        assert_eq!(capitalize("ítem de catálogo"), "Ítem de catálogo");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn item_paths() {
        assert_eq!(item_path("/brand", 4), "/brand/4");
        assert_eq!(item_path("/subgroup/muebles", 12), "/subgroup/muebles/12");
    }
}

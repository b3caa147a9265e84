use contracts::domain::a002_component::aggregate::{Component, ComponentDto};
use contracts::domain::a002_component::ComponentKind;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use super::details::component_form;
use crate::domain::a002_component::api;
use crate::shared::components::confirm;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_LIST};
use crate::shared::toast::use_toast;

pub fn kind_badge_class(kind: ComponentKind) -> &'static str {
    if kind.is_unique_per_asset() {
        "badge badge--primary"
    } else {
        "badge badge--neutral"
    }
}

#[component]
pub fn ComponentList() -> impl IntoView {
    let state = ListState::<Component>::new();
    let free_only = RwSignal::new(false);
    let modals = use_modal_stack();
    let toast = use_toast();

    let reload = move || state.load("los componentes", api::fetch_components);
    Effect::new(move |_| reload());

    let open_form = move |dto: ComponentDto| {
        modals.push_with_frame(Some("max-width: 560px;".into()), None, move |handle| {
            component_form(handle, dto.clone(), Callback::new(move |_| reload()))
        });
    };

    let remove = move |id: EntityId, installed: bool| {
        let message = if installed {
            "El componente está instalado en un equipo. ¿Eliminarlo de todas formas?"
        } else {
            "¿Eliminar este componente?"
        };
        if !confirm(message) {
            return;
        }
        spawn_local(async move {
            match api::delete_component(id).await {
                Ok(()) => {
                    toast.success("Componente eliminado");
                    reload();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let page = Signal::derive(move || {
        let mut rows = state.filtered();
        if free_only.get() {
            rows.retain(Component::is_free);
        }
        state.page_of(&rows)
    });
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="a002_component--list" category=PAGE_CAT_LIST>
            <PageHeader title="Componentes" count=count>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_form(ComponentDto::default())
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
                    <SearchInput
                        placeholder="Nombre, serial, tipo o equipo..."
                        on_change=Callback::new(move |q| state.set_query(q))
                    />
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || free_only.get()
                            on:change=move |ev| {
                                free_only.set(event_target_checked(&ev));
                                state.page.set(0);
                            }
                        />
                        " Solo en almacén"
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
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Tipo"</TableHeaderCell>
                                <TableHeaderCell>"Serial"</TableHeaderCell>
                                <TableHeaderCell>"Equipo"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|c| (c.id, c.asset_id)
                                children=move |c| {
                                    let id = c.id;
                                    let installed = !c.is_free();
                                    let kind = c.kind();
                                    let dto = ComponentDto::from(&c);
                                    let owner = match (&c.asset_code, c.asset_id) {
                                        (Some(code), _) => code.clone(),
                                        (None, Some(asset_id)) => format!("#{}", asset_id),
                                        (None, None) => "En almacén".to_string(),
                                    };
                                    let name = c.name.clone();
                                    let serial = c.serial.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=kind_badge_class(kind)>{kind.label()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{serial}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class:text-muted=!installed>{owner}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="row-actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| open_form(dto.clone())
                                                        attr:title="Editar"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| remove(id, installed)
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

    #[test]
    fn unique_slots_get_the_primary_badge() {
        assert_eq!(kind_badge_class(ComponentKind::Cpu), "badge badge--primary");
        assert_eq!(kind_badge_class(ComponentKind::PowerSupply), "badge badge--primary");
        assert_eq!(kind_badge_class(ComponentKind::Ram), "badge badge--neutral");
        assert_eq!(kind_badge_class(ComponentKind::Other), "badge badge--neutral");
    }
}

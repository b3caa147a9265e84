mod workflow;

use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::a002_component::aggregate::Component;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::domain::a002_component::api::fetch_installed;
use crate::domain::a002_component::ui::list::kind_badge_class;
use crate::shared::icons::icon;
use crate::shared::list_utils::error_box;
use crate::shared::modal_stack::use_modal_stack;
use workflow::Workflow;

/// Parts installed in a computer, with the Add / Transfer / Replace actions.
#[component]
pub fn ComponentsPanel(asset: Asset) -> impl IntoView {
    let asset_id = asset.id;
    let asset = StoredValue::new(asset);
    let installed: RwSignal<Vec<Component>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let modals = use_modal_stack();

    let reload = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_installed(asset_id).await {
                Ok(list) => {
                    error.set(None);
                    installed.set(list);
                }
                Err(e) => error.set(Some(format!("No se pudieron cargar los componentes: {}", e))),
            }
            loading.set(false);
        });
    };
    Effect::new(move |_| reload());

    let open = move |flow: Workflow| {
        modals.push(move |handle| {
            workflow::workflow_modal(
                handle,
                asset.get_value(),
                flow.clone(),
                Callback::new(move |_| reload()),
            )
        });
    };

    view! {
        <section class="components-panel">
            <div class="components-panel__header">
                <h4>"Componentes instalados"</h4>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open(Workflow::Add)>
                    {icon("plus")}
                    " Agregar"
                </Button>
            </div>
            {error_box(error)}
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Componente"</TableHeaderCell>
                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                        <TableHeaderCell>"Serial"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || installed.get()
                        key=|c| c.id
                        children=move |c| {
                            let kind = c.kind();
                            let for_transfer = c.clone();
                            let for_replace = c.clone();
                            let name = c.name.clone();
                            let serial = c.serial.clone().unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{name}</TableCellLayout>
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
                                        <div class="row-actions">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open(Workflow::Transfer(for_transfer.clone()))
                                                attr:title="Trasladar a otro equipo"
                                            >
                                                {icon("swap")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open(Workflow::Replace(for_replace.clone()))
                                                attr:title="Reemplazar"
                                            >
                                                {icon("refresh")}
                                            </Button>
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || !loading.get() && installed.with(|i| i.is_empty())>
                <div class="empty-state">"Sin componentes instalados"</div>
            </Show>
        </section>
    }
}

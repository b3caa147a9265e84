use contracts::domain::common::EntityId;
use contracts::system::users::{Role, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{empty_state, error_box, ListState, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = ListState::<User>::new();
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    let toast = use_toast();

    let load_data = move || state.load("usuarios", api::fetch_users);

    Effect::new(move |_| {
        load_data();
        spawn_local(async move {
            match api::fetch_roles().await {
                Ok(list) => roles.set(list),
                Err(e) => toast.error(format!("No se pudieron cargar los roles: {}", e)),
            }
        });
    });

    let save = move |id: EntityId, dto: UpdateUserDto, done: &'static str| {
        spawn_local(async move {
            match api::update_user(id, &dto).await {
                Ok(()) => {
                    toast.success(done);
                    load_data();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let toggle_active = move |user: &User| {
        let mut dto = UpdateUserDto::from(user);
        dto.is_active = !user.is_active;
        let done = if dto.is_active { "Usuario activado" } else { "Usuario desactivado" };
        save(user.id, dto, done);
    };

    let change_role = move |user: &User, role_id: Option<EntityId>| {
        let mut dto = UpdateUserDto::from(user);
        dto.role_id = role_id;
        save(user.id, dto, "Rol actualizado");
    };

    let page = Signal::derive(move || state.visible());
    let count = Signal::derive(move || page.with(|p| p.total_count));

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Usuarios" count=count>
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
                        placeholder="Usuario, nombre o correo..."
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
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Correo"</TableHeaderCell>
                                <TableHeaderCell>"Rol"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|u| (u.id, u.is_active, u.role_id)
                                children=move |user| {
                                    let for_role = user.clone();
                                    let for_toggle = user.clone();
                                    let current_role = user.role_id;
                                    let is_active = user.is_active;
                                    let username = user.username.clone();
                                    let full_name = user.full_name.clone().unwrap_or_default();
                                    let email = user.email.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{username}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {full_name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <select
                                                    class="form__select form__select--compact"
                                                    on:change=move |ev| {
                                                        let role_id = event_target_value(&ev).parse::<EntityId>().ok();
                                                        change_role(&for_role, role_id);
                                                    }
                                                >
                                                    <option value="" selected=current_role.is_none()>"Sin rol"</option>
                                                    {move || {
                                                        roles
                                                            .get()
                                                            .into_iter()
                                                            .map(|r| {
                                                                let value = r.id.to_string();
                                                                let selected = current_role == Some(r.id);
                                                                view! {
                                                                    <option value=value selected=selected>
                                                                        {r.name}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()
                                                    }}
                                                </select>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if is_active {
                                                        view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| toggle_active(&for_toggle)
                                                >
                                                    {if is_active { "Desactivar" } else { "Activar" }}
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

use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::{api, use_notifications};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::error_box;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_SYSTEM};
use crate::shared::toast::use_toast;

/// Header bell with the unread counter; opens the notifications tab.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let store = use_notifications();
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <button
            class="top-header__icon-btn"
            title="Notificaciones"
            on:click=move |_| tabs.open_tab("notifications", tab_label_for_key("notifications"))
        >
            {icon("bell")}
            <Show when=move || { store.unread() > 0 }>
                <span class="top-header__badge">{move || store.unread().to_string()}</span>
            </Show>
        </button>
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = use_notifications();
    let toast = use_toast();

    Effect::new(move |_| store.refresh());

    let read_one = move |id: EntityId| {
        spawn_local(async move {
            match api::mark_read(id).await {
                Ok(()) => store.refresh(),
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let read_all = move || {
        spawn_local(async move {
            match api::mark_all_read().await {
                Ok(()) => {
                    toast.success("Todas las notificaciones marcadas como leídas");
                    store.refresh();
                }
                Err(e) => toast.error(e.to_string()),
            }
        });
    };

    let count = Signal::derive(move || store.items.with(|i| i.len()));

    view! {
        <PageFrame page_id="sys_notifications--list" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Notificaciones" count=count>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| read_all()
                    disabled=Signal::derive(move || store.unread() == 0)
                >
                    {icon("check")}
                    " Marcar todas como leídas"
                </Button>
            </PageHeader>

            <div class="page__content">
                {error_box(store.error)}
                <ul class="notification-list">
                    <For
                        each=move || store.items.get()
                        key=|n| (n.id, n.read)
                        children=move |n| {
                            let id = n.id;
                            let read = n.read;
                            let class = if read { "notification" } else { "notification notification--unread" };
                            view! {
                                <li class=class>
                                    <div class="notification__body">
                                        <strong>{n.title.clone()}</strong>
                                        <p>{n.message.clone()}</p>
                                        <span class="notification__date">{format_datetime(&n.created_at)}</span>
                                    </div>
                                    <Show when=move || !read>
                                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| read_one(id)>
                                            "Marcar como leída"
                                        </Button>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || count.get() == 0>
                    <div class="table-empty">"No hay notificaciones"</div>
                </Show>
            </div>
        </PageFrame>
    }
}

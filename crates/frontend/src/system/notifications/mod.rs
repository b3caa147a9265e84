pub mod api;
pub mod ui;

use contracts::system::notifications::{sort_for_display, unread_count, Notification};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Notifications shared by the header bell and the notifications page.
#[derive(Clone, Copy)]
pub struct NotificationsStore {
    pub items: RwSignal<Vec<Notification>>,
    pub error: RwSignal<Option<String>>,
}

impl NotificationsStore {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn unread(&self) -> usize {
        self.items.with(|items| unread_count(items))
    }

    pub fn refresh(&self) {
        let store = *self;
        spawn_local(async move {
            match api::fetch_notifications().await {
                Ok(mut items) => {
                    sort_for_display(&mut items);
                    store.items.set(items);
                    store.error.set(None);
                }
                Err(e) => store
                    .error
                    .set(Some(format!("No se pudieron cargar las notificaciones: {}", e))),
            }
        });
    }
}

impl Default for NotificationsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationsStore {
    use_context::<NotificationsStore>().expect("NotificationsStore not provided in context")
}

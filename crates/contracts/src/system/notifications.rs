use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

pub const ENDPOINT: &str = "/notifications";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: String,
}

pub fn read_endpoint(id: EntityId) -> String {
    format!("{}/{}/read", ENDPOINT, id)
}

pub fn read_all_endpoint() -> String {
    format!("{}/read-all", ENDPOINT)
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Newest first; unread before read on the same timestamp.
pub fn sort_for_display(items: &mut [Notification]) {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.read.cmp(&b.read))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: EntityId, read: bool, at: &str) -> Notification {
        Notification {
            id,
            title: String::new(),
            message: format!("n{}", id),
            read,
            created_at: at.to_string(),
        }
    }

    #[test]
    fn counts_unread() {
        let items = vec![n(1, true, "a"), n(2, false, "b"), n(3, false, "c")];
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn sorts_newest_first() {
        let mut items = vec![
            n(1, true, "2024-01-01T10:00:00Z"),
            n(2, true, "2024-03-01T10:00:00Z"),
            n(3, false, "2024-03-01T10:00:00Z"),
        ];
        sort_for_display(&mut items);
        let ids: Vec<EntityId> = items.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn endpoints() {
        assert_eq!(read_endpoint(7), "/notifications/7/read");
        assert_eq!(read_all_endpoint(), "/notifications/read-all");
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::list_query::{matches_query, Searchable};

pub const ENDPOINT: &str = "/audit";
pub const LOGS_ENDPOINT: &str = "/logs";

/// Who changed what, as recorded by the registry API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: EntityId,
    #[serde(default)]
    pub user: Option<String>,
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<EntityId>,
    #[serde(default)]
    pub detail: Option<String>,
    pub created_at: String,
}

impl AuditEntry {
    fn day(&self) -> Option<NaiveDate> {
        let date_part = self.created_at.split('T').next().unwrap_or(&self.created_at);
        NaiveDate::parse_from_str(date_part.get(..10).unwrap_or(date_part), "%Y-%m-%d").ok()
    }
}

impl Searchable for AuditEntry {
    fn search_haystack(&self) -> Vec<String> {
        vec![
            self.user.clone().unwrap_or_default(),
            self.action.clone(),
            self.entity.clone(),
            self.detail.clone().unwrap_or_default(),
        ]
    }
}

/// Audit report filter, applied on the fetched list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuditFilter {
    /// Free-text search over user, action, entity and detail.
    pub text: String,
    pub user: Option<String>,
    pub action: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AuditFilter {
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if !matches_query(entry, &self.text) {
            return false;
        }
        if let Some(user) = &self.user {
            let same_user = entry
                .user
                .as_deref()
                .map(|u| u.eq_ignore_ascii_case(user))
                .unwrap_or(false);
            if !same_user {
                return false;
            }
        }
        if let Some(action) = &self.action {
            if !entry.action.eq_ignore_ascii_case(action) {
                return false;
            }
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        match entry.day() {
            Some(day) => {
                self.from.map(|from| day >= from).unwrap_or(true)
                    && self.to.map(|to| day <= to).unwrap_or(true)
            }
            None => false,
        }
    }

    pub fn apply(&self, entries: &[AuditEntry]) -> Vec<AuditEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Distinct actions present in the log, for the filter dropdown.
pub fn distinct_actions(entries: &[AuditEntry]) -> Vec<String> {
    let mut actions: Vec<String> = entries.iter().map(|e| e.action.clone()).collect();
    actions.sort();
    actions.dedup();
    actions
}

/// Distinct users present in the log, for the filter dropdown.
pub fn distinct_users(entries: &[AuditEntry]) -> Vec<String> {
    let mut users: Vec<String> = entries.iter().filter_map(|e| e.user.clone()).collect();
    users.sort();
    users.dedup();
    users
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: EntityId, action: &str, at: &str) -> AuditEntry {
        AuditEntry {
            id,
            user: Some("admin".into()),
            action: action.into(),
            entity: "furniture".into(),
            entity_id: Some(id),
            detail: None,
            created_at: at.into(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn date_range_is_inclusive() {
        let entries = vec![
            entry(1, "CREATE", "2024-03-01T08:00:00Z"),
            entry(2, "UPDATE", "2024-03-15T08:00:00Z"),
            entry(3, "DELETE", "2024-04-01 09:30:00"),
        ];
        let filter = AuditFilter {
            from: Some(date("2024-03-01")),
            to: Some(date("2024-03-15")),
            ..Default::default()
        };
        let ids: Vec<EntityId> = filter.apply(&entries).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn action_and_text_filters() {
        let entries = vec![
            entry(1, "CREATE", "2024-03-01T08:00:00Z"),
            entry(2, "UPDATE", "2024-03-15T08:00:00Z"),
        ];
        let filter = AuditFilter {
            action: Some("update".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&entries).len(), 1);

        let filter = AuditFilter {
            text: "nobody".into(),
            ..Default::default()
        };
        assert!(filter.apply(&entries).is_empty());
    }

    #[test]
    fn unparseable_dates_only_drop_out_of_ranged_filters() {
        let entries = vec![entry(1, "CREATE", "ayer")];
        assert_eq!(AuditFilter::default().apply(&entries).len(), 1);
        let ranged = AuditFilter {
            from: Some(date("2024-01-01")),
            ..Default::default()
        };
        assert!(ranged.apply(&entries).is_empty());
    }

    #[test]
    fn user_filter_matches_the_author_only() {
        let mut other = entry(2, "UPDATE", "2024-03-15T08:00:00Z");
        other.user = Some("operador".into());
        let mut system = entry(3, "UPDATE", "2024-03-15T08:00:00Z");
        system.user = None;
        let entries = vec![entry(1, "CREATE", "2024-03-01T08:00:00Z"), other, system];

        let filter = AuditFilter {
            user: Some("Operador".into()),
            ..Default::default()
        };
        let ids: Vec<EntityId> = filter.apply(&entries).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(distinct_users(&entries), vec!["admin", "operador"]);
    }

    #[test]
    fn actions_are_deduplicated() {
        let entries = vec![
            entry(1, "UPDATE", "x"),
            entry(2, "CREATE", "x"),
            entry(3, "UPDATE", "x"),
        ];
        assert_eq!(distinct_actions(&entries), vec!["CREATE", "UPDATE"]);
    }
}

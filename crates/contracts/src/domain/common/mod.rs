//! Common types for registry entities

/// Primary key type used by the registry API
pub type EntityId = i64;

/// Reference records offered in pickers (departments, brands, subgroups...).
pub trait Catalog {
    fn id(&self) -> EntityId;
    fn display_name(&self) -> String;
}

/// Trimmed optional text: blank input becomes `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" nota "), Some("nota".to_string()));
    }
}

pub mod catalog_page;
pub mod form_fields;
pub mod pagination_controls;

/// Browser `confirm()`; a missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

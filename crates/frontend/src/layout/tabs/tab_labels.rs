//! Tab titles, one place for every tab key the sidebar and registry know.

/// Human title for a tab key. Unknown keys yield `""`.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "dashboard" => "Panel principal",

        // ── Bienes ────────────────────────────────────────────────────────
        "a001_asset" => "Bienes",
        "a002_component" => "Componentes",
        "a012_component_transfer" => "Traslados de componentes",

        // ── Catálogos ─────────────────────────────────────────────────────
        "a003_department" => "Departamentos",
        "a004_brand" => "Marcas",
        "a005_model" => "Modelos",
        "a006_subgroup" => "Subgrupos",
        "a007_parish" => "Parroquias",
        "a008_concept_incorporation" => "Conceptos de incorporación",
        "a008_concept_disposal" => "Conceptos de desincorporación",

        // ── Movimientos ───────────────────────────────────────────────────
        "a009_incorporation" => "Incorporaciones",
        "a010_disposal" => "Desincorporaciones",
        "a011_missing_good" => "Bienes faltantes",

        // ── Reportes ──────────────────────────────────────────────────────
        "r_missing_goods" => "Reporte de faltantes",
        "r_exports" => "Formularios BM y etiquetas",

        // ── Sistema ───────────────────────────────────────────────────────
        "notifications" => "Notificaciones",
        "sys_audit" => "Auditoría",
        "sys_logs" => "Registros del sistema",
        "sys_users" => "Usuarios",

        _ => "",
    }
}

/// Title shown on the tab strip, falling back to the key itself.
pub fn tab_title(key: &str) -> String {
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_labels() {
        assert_eq!(tab_label_for_key("a001_asset"), "Bienes");
        assert_eq!(tab_label_for_key("sys_users"), "Usuarios");
        assert_eq!(tab_label_for_key("a008_concept_disposal"), "Conceptos de desincorporación");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(tab_label_for_key("nope"), "");
        assert_eq!(tab_title("nope"), "nope");
        assert_eq!(tab_title("r_exports"), "Formularios BM y etiquetas");
    }
}

//! Server-generated regulatory forms and labels.
//!
//! The client only picks the form and its parameters; the workbook or PDF
//! comes back as a blob.

use serde::{Deserialize, Serialize};

use super::api_error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportForm {
    Bm1,
    Bm2,
    Bm3,
    Bm4,
}

impl ExportForm {
    pub const ALL: [ExportForm; 4] = [ExportForm::Bm1, ExportForm::Bm2, ExportForm::Bm3, ExportForm::Bm4];

    pub fn endpoint(self) -> &'static str {
        match self {
            ExportForm::Bm1 => "/excel/bm1",
            ExportForm::Bm2 => "/excel/bm2",
            ExportForm::Bm3 => "/excel/bm3",
            ExportForm::Bm4 => "/excel/bm4",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ExportForm::Bm1 => "BM-1",
            ExportForm::Bm2 => "BM-2",
            ExportForm::Bm3 => "BM-3",
            ExportForm::Bm4 => "BM-4",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ExportForm::Bm1 => "Inventario de bienes muebles",
            ExportForm::Bm2 => "Relación del movimiento de bienes",
            ExportForm::Bm3 => "Relación de bienes faltantes",
            ExportForm::Bm4 => "Resumen de la cuenta de bienes",
        }
    }

    /// BM-1 and BM-3 are signed per department; BM-2 and BM-4 may cover the
    /// whole organization.
    pub fn requires_department(self) -> bool {
        matches!(self, ExportForm::Bm1 | ExportForm::Bm3)
    }

    pub fn file_name(self, query: &ExportQuery) -> String {
        let scope = query
            .department_id
            .map(|id| format!("dep{}", id))
            .unwrap_or_else(|| "general".to_string());
        format!("{}_{}_{:04}-{:02}.xlsx", self.code(), scope, query.year, query.month)
    }
}

/// Query string parameters of the `/excel/bm*` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    pub year: i32,
    pub month: u32,
}

impl ExportQuery {
    pub fn validate(&self, form: ExportForm) -> Result<(), ApiError> {
        if !(1..=12).contains(&self.month) {
            return Err(ApiError::Validation("Mes inválido".into()));
        }
        if !(2000..=2100).contains(&self.year) {
            return Err(ApiError::Validation("Año inválido".into()));
        }
        if form.requires_department() && self.department_id.is_none() {
            return Err(ApiError::Validation(format!(
                "El formulario {} requiere un departamento",
                form.code()
            )));
        }
        Ok(())
    }
}

pub const QR_LABELS_ENDPOINT: &str = "/labels/qr";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrLabelRequest {
    pub asset_ids: Vec<i64>,
}

impl QrLabelRequest {
    pub fn new(mut asset_ids: Vec<i64>) -> Result<Self, ApiError> {
        asset_ids.sort_unstable();
        asset_ids.dedup();
        if asset_ids.is_empty() {
            return Err(ApiError::Validation(
                "Seleccione al menos un bien para generar etiquetas".into(),
            ));
        }
        Ok(Self { asset_ids })
    }

    pub fn file_name(&self) -> String {
        format!("etiquetas_qr_{}.pdf", self.asset_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(dept: Option<i64>, month: u32) -> ExportQuery {
        ExportQuery {
            department_id: dept,
            year: 2024,
            month,
        }
    }

    #[test]
    fn endpoints_are_distinct() {
        let mut seen: Vec<&str> = ExportForm::ALL.iter().map(|f| f.endpoint()).collect();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(ExportForm::Bm3.endpoint(), "/excel/bm3");
    }

    #[test]
    fn file_name_carries_scope_and_period() {
        assert_eq!(
            ExportForm::Bm1.file_name(&query(Some(4), 3)),
            "BM-1_dep4_2024-03.xlsx"
        );
        assert_eq!(
            ExportForm::Bm4.file_name(&query(None, 11)),
            "BM-4_general_2024-11.xlsx"
        );
    }

    #[test]
    fn validation_rules() {
        assert!(query(Some(1), 13).validate(ExportForm::Bm2).is_err());
        assert!(query(None, 5).validate(ExportForm::Bm1).is_err());
        assert!(query(None, 5).validate(ExportForm::Bm4).is_ok());
        assert!(query(Some(2), 5).validate(ExportForm::Bm3).is_ok());
    }

    #[test]
    fn qr_request_dedups_and_rejects_empty() {
        let req = QrLabelRequest::new(vec![5, 3, 5]).unwrap();
        assert_eq!(req.asset_ids, vec![3, 5]);
        assert_eq!(req.file_name(), "etiquetas_qr_2.pdf");
        assert!(QrLabelRequest::new(vec![]).is_err());
    }
}

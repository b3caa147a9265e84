//! BM-1..BM-4 workbooks and QR label sheets. Both are produced by the
//! server; this page only collects parameters and saves the returned blob.

use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::export::{ExportForm, ExportQuery, QrLabelRequest, QR_LABELS_ENDPOINT};
use contracts::shared::list_query::filter_items;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_asset::api::fetch_assets;
use crate::domain::a003_department::api::fetch_departments;
use crate::shared::api_utils::{get_blob, post_blob};
use crate::shared::components::form_fields::{id_select, load_options};
use crate::shared::date_utils::{current_year_month, MONTH_NAMES};
use crate::shared::download::{save_blob, PDF_MIME, XLSX_MIME};
use crate::shared::icons::icon;
use crate::shared::list_utils::{error_box, SearchInput};
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_REPORT};
use crate::shared::toast::use_toast;

/// Matches shown in the label picker at once; narrow with the search box.
const QR_PICKER_LIMIT: usize = 50;

/// Encoded query string and target file name for one workbook.
pub fn export_request(form: ExportForm, query: &ExportQuery) -> Result<(String, String), ApiError> {
    query.validate(form)?;
    let encoded = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok((encoded, form.file_name(query)))
}

pub async fn download_export(form: ExportForm, query: ExportQuery) -> Result<String, ApiError> {
    let (encoded, file_name) = export_request(form, &query)?;
    log::info!("Requesting {} ({})", form.code(), encoded);
    let blob = get_blob(form.endpoint(), &encoded, XLSX_MIME).await?;
    save_blob(&blob, &file_name)?;
    Ok(file_name)
}

/// One PDF with a QR label per asset. Returns the saved file name.
pub async fn download_qr_labels(asset_ids: Vec<EntityId>) -> Result<String, ApiError> {
    let request = QrLabelRequest::new(asset_ids)?;
    log::info!("Requesting QR labels for {} assets", request.asset_ids.len());
    let blob = post_blob(QR_LABELS_ENDPOINT, &request, PDF_MIME).await?;
    let file_name = request.file_name();
    save_blob(&blob, &file_name)?;
    Ok(file_name)
}

pub fn toggle_selection(selected: &mut Vec<EntityId>, id: EntityId) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

#[component]
pub fn ExportsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="r_exports--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Formularios y etiquetas" />
            <div class="page__content">
                <RegulatoryForms />
                <QrLabels />
            </div>
        </PageFrame>
    }
}

#[component]
fn RegulatoryForms() -> impl IntoView {
    let toast = use_toast();
    let (year_now, month_now) = current_year_month();
    let form = RwSignal::new(ExportForm::Bm1);
    let department = RwSignal::new(None::<EntityId>);
    let year = RwSignal::new(year_now);
    let month = RwSignal::new(month_now);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let departments = load_options(fetch_departments);

    let generate = move || {
        let form = form.get_untracked();
        let query = ExportQuery {
            department_id: department.get_untracked(),
            year: year.get_untracked(),
            month: month.get_untracked(),
        };
        error.set(None);
        busy.set(true);
        toast.info(format!("Generando {}...", form.code()));
        spawn_local(async move {
            match download_export(form, query).await {
                Ok(file_name) => toast.success(format!("Descargado {}", file_name)),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="report-section">
            <h2 class="report-section__title">"Formularios BM"</h2>
            {error_box(error)}
            <div class="export-forms">
                {ExportForm::ALL
                    .into_iter()
                    .map(|f| {
                        view! {
                            <label class="export-forms__option">
                                <input
                                    type="radio"
                                    name="bm-form"
                                    prop:checked=move || form.get() == f
                                    on:change=move |_| form.set(f)
                                />
                                <span class="export-forms__code">{f.code()}</span>
                                <span class="export-forms__title">{f.title()}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="filter-panel">
                <div class="form__group">
                    <label class="form__label">
                        {move || {
                            if form.get().requires_department() {
                                "Departamento (obligatorio)"
                            } else {
                                "Departamento"
                            }
                        }}
                    </label>
                    {id_select(departments, department, "Todos los departamentos")}
                </div>
                <div class="form__group">
                    <label class="form__label">"Año"</label>
                    <input
                        type="number"
                        class="form__input"
                        min="2000"
                        max="2100"
                        prop:value=move || year.get().to_string()
                        on:input=move |ev| {
                            if let Ok(y) = event_target_value(&ev).trim().parse::<i32>() {
                                year.set(y);
                            }
                        }
                    />
                </div>
                <div class="form__group">
                    <label class="form__label">"Mes"</label>
                    <select
                        class="form__select"
                        prop:value=move || month.get().to_string()
                        on:change=move |ev| {
                            if let Ok(m) = event_target_value(&ev).parse::<u32>() {
                                month.set(m);
                            }
                        }
                    >
                        {MONTH_NAMES
                            .iter()
                            .zip(1u32..)
                            .map(|(name, m)| {
                                view! {
                                    <option value=m.to_string() selected=move || month.get() == m>
                                        {*name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| generate()
                    disabled=Signal::derive(move || busy.get())
                >
                    {icon("download")}
                    " Generar Excel"
                </Button>
            </div>
        </section>
    }
}

#[component]
fn QrLabels() -> impl IntoView {
    let toast = use_toast();
    let assets: RwSignal<Vec<Asset>> = RwSignal::new(Vec::new());
    let query = RwSignal::new(String::new());
    let selected: RwSignal<Vec<EntityId>> = RwSignal::new(Vec::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match fetch_assets().await {
            Ok(list) => assets.set(list),
            Err(e) => error.set(Some(format!("No se pudieron cargar los bienes: {}", e))),
        }
    });

    let matches = Signal::derive(move || {
        let q = query.get();
        assets.with(|list| {
            let mut rows = filter_items(list, &q);
            rows.truncate(QR_PICKER_LIMIT);
            rows
        })
    });

    let generate = move || {
        let ids = selected.get_untracked();
        error.set(None);
        busy.set(true);
        spawn_local(async move {
            match download_qr_labels(ids).await {
                Ok(file_name) => toast.success(format!("Descargado {}", file_name)),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="report-section">
            <h2 class="report-section__title">"Etiquetas QR"</h2>
            {error_box(error)}
            <div class="filter-panel">
                <SearchInput
                    placeholder="Buscar bien por número o descripción..."
                    on_change=Callback::new(move |q| query.set(q))
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| selected.set(Vec::new())
                    disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                >
                    "Limpiar selección"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| generate()
                    disabled=Signal::derive(move || busy.get() || selected.with(|s| s.is_empty()))
                >
                    {icon("qr")}
                    {move || format!(" Generar PDF ({})", selected.with(|s| s.len()))}
                </Button>
            </div>
            <ul class="qr-picker">
                <For
                    each=move || matches.get()
                    key=|a| a.id
                    children=move |a| {
                        let id = a.id;
                        let label = a.label();
                        view! {
                            <li class="qr-picker__item">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|s| s.contains(&id))
                                        on:change=move |_| selected.update(|s| toggle_selection(s, id))
                                    />
                                    " "
                                    {label}
                                </label>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_missing_department() {
        let query = ExportQuery {
            department_id: None,
            year: 2024,
            month: 3,
        };
        let (encoded, file_name) = export_request(ExportForm::Bm4, &query).unwrap();
        assert_eq!(encoded, "year=2024&month=3");
        assert_eq!(file_name, "BM-4_general_2024-03.xlsx");
    }

    #[test]
    fn request_includes_department() {
        let query = ExportQuery {
            department_id: Some(4),
            year: 2024,
            month: 11,
        };
        let (encoded, _) = export_request(ExportForm::Bm1, &query).unwrap();
        assert_eq!(encoded, "department_id=4&year=2024&month=11");
    }

    #[test]
    fn request_is_validated_first() {
        let query = ExportQuery {
            department_id: None,
            year: 2024,
            month: 3,
        };
        assert!(export_request(ExportForm::Bm3, &query).is_err());
    }

    #[test]
    fn selection_toggles() {
        let mut selected = vec![1, 2];
        toggle_selection(&mut selected, 3);
        assert_eq!(selected, vec![1, 2, 3]);
        toggle_selection(&mut selected, 1);
        assert_eq!(selected, vec![2, 3]);
    }
}

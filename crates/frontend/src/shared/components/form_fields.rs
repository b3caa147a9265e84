//! Inputs bound to one field of a form DTO held in a `RwSignal`.
//!
//! Each field is addressed by a getter/setter pair, so a form is a list of
//! calls such as `text_field("Código", vm.form, |f| f.code.clone(), |f, v| f.code = v)`.

use contracts::domain::common::{non_blank, Catalog, EntityId};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub type Options = Vec<(EntityId, String)>;

pub fn text_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> String,
    set: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Optional text; blank input is stored as `None`.
pub fn opt_text_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> Option<String>,
    set: fn(&mut D, Option<String>),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input"
                prop:value=move || form.with(get).unwrap_or_default()
                on:input=move |ev| {
                    let value = non_blank(&event_target_value(&ev));
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

pub fn textarea_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> Option<String>,
    set: fn(&mut D, Option<String>),
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=move || form.with(get).unwrap_or_default()
                on:input=move |ev| {
                    let value = non_blank(&event_target_value(&ev));
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Integer input; unparseable text leaves the field unchanged.
pub fn int_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> i32,
    set: fn(&mut D, i32),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="number"
                step="1"
                class="form__input"
                prop:value=move || form.with(get).to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).trim().parse::<i32>() {
                        form.update(|f| set(f, value));
                    }
                }
            />
        </div>
    }
}

pub fn money_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> f64,
    set: fn(&mut D, f64),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="number"
                step="0.01"
                class="form__input"
                prop:value=move || form.with(get).to_string()
                on:input=move |ev| {
                    let text = event_target_value(&ev).trim().replace(',', ".");
                    if let Ok(value) = text.parse::<f64>() {
                        form.update(|f| set(f, value));
                    }
                }
            />
        </div>
    }
}

/// `<input type="date">`, value kept as `YYYY-MM-DD`.
pub fn date_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    get: fn(&D) -> String,
    set: fn(&mut D, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="date"
                class="form__input"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

/// Catalog picker; the empty option maps to `None`.
pub fn select_field<D: Clone + Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<D>,
    options: Signal<Options>,
    get: fn(&D) -> Option<EntityId>,
    set: fn(&mut D, Option<EntityId>),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || form.with(get).map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev).parse::<EntityId>().ok();
                    form.update(|f| set(f, value));
                }
            >
                <option value="">"Seleccione..."</option>
                {move || {
                    let current = form.with(get);
                    options
                        .get()
                        .into_iter()
                        .map(|(id, name)| {
                            view! {
                                <option value=id.to_string() selected=current == Some(id)>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Free-standing picker bound to its own signal (filters, workflow modals).
pub fn id_select(
    options: Signal<Options>,
    value: RwSignal<Option<EntityId>>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="form__select"
            prop:value=move || value.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| value.set(event_target_value(&ev).parse::<EntityId>().ok())
        >
            <option value="">{placeholder}</option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(id, name)| {
                        view! {
                            <option value=id.to_string() selected=current == Some(id)>
                                {name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// `(id, display name)` pairs for a picker.
pub fn catalog_options<C: Catalog>(items: &[C]) -> Options {
    items.iter().map(|c| (c.id(), c.display_name())).collect()
}

/// Picker options filled in the background; stays empty if the fetch fails
/// (the failure is already logged by the API layer).
pub fn load_options<C, F, Fut>(fetch: F) -> Signal<Options>
where
    C: Catalog + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<C>, ApiError>> + 'static,
{
    let options = RwSignal::new(Options::new());
    spawn_local(async move {
        if let Ok(items) = fetch().await {
            options.set(catalog_options(&items));
        }
    });
    options.into()
}

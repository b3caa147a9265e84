//! Shared state and widgets for client-side filtered, paginated lists.
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::{filter_items, paginate, total_pages, Page, Searchable};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::config::page_size;
use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Everything a list screen keeps: the fetched rows, the search text and the
/// page cursor. Every screen re-fetches on mount.
pub struct ListState<T: Send + Sync + 'static> {
    pub all: RwSignal<Vec<T>>,
    pub query: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Clone + Searchable + Send + Sync + 'static> ListState<T> {
    pub fn new() -> Self {
        Self {
            all: RwSignal::new(Vec::new()),
            query: RwSignal::new(String::new()),
            page: RwSignal::new(0),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Rows matching the search box.
    pub fn filtered(&self) -> Vec<T> {
        self.all.with(|items| filter_items(items, &self.query.get()))
    }

    /// Current page of the search result.
    pub fn visible(&self) -> Page<T> {
        self.page_of(&self.filtered())
    }

    /// Current page of rows the caller filtered further (e.g. by category).
    pub fn page_of(&self, rows: &[T]) -> Page<T> {
        paginate(rows, self.page.get(), page_size())
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.page.set(0);
    }

    /// Fetch and replace the rows. The error is kept for the page's alert box.
    pub fn load<F, Fut>(&self, what: &'static str, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let state = *self;
        state.loading.set(true);
        state.error.set(None);
        spawn_local(async move {
            match fetch().await {
                Ok(rows) => {
                    log::debug!("Loaded {} {}", rows.len(), what);
                    state.all.set(rows);
                    let count = state.all.with_untracked(|a| a.len());
                    let last = total_pages(count, page_size()) - 1;
                    state.page.update(|p| *p = (*p).min(last));
                }
                Err(e) => {
                    state
                        .error
                        .set(Some(format!("No se pudieron cargar {}: {}", what, e)));
                }
            }
            state.loading.set(false);
        });
    }
}

impl<T: Clone + Searchable + Send + Sync + 'static> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Search box that reports its value 300 ms after the last keystroke.
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // a newer keystroke supersedes this one
            if generation.get_value() == mine {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Red alert box with the last load error, if any.
pub fn error_box(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|e| view! { <div class="alert alert--error">{e}</div> })
    }
}

/// Loading or empty-state message under a table.
pub fn empty_state(count: Signal<usize>, loading: RwSignal<bool>) -> impl IntoView {
    move || {
        if loading.get() {
            view! { <div class="table-empty">"Cargando..."</div> }.into_any()
        } else if count.get() == 0 {
            view! { <div class="table-empty">"Sin registros"</div> }.into_any()
        } else {
            ().into_any()
        }
    }
}

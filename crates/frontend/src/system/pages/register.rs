use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api;

#[component]
pub fn RegisterPage(on_back: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let confirmation = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked();
        if let Err(e) = request.validate(&confirmation.get_untracked()) {
            error_message.set(Some(e.to_string()));
            return;
        }
        is_loading.set(true);
        error_message.set(None);
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => done.set(true),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Registro de Bienes"</h1>
                <h2>"Crear cuenta"</h2>

                <Show
                    when=move || !done.get()
                    fallback=move || view! {
                        <div class="success-message">"Cuenta creada. Ya puede iniciar sesión."</div>
                        <button class="btn-primary" on:click=move |_| on_back.run(())>"Ir a iniciar sesión"</button>
                    }
                >
                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
                    </Show>

                    <form on:submit=on_submit>
                        {register_field(form, is_loading, "full_name", "Nombre completo", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                        {register_field(form, is_loading, "username", "Usuario", "text", |f| f.username.clone(), |f, v| f.username = v.trim().to_string())}
                        {register_field(
                            form,
                            is_loading,
                            "email",
                            "Correo electrónico",
                            "email",
                            |f| f.email.clone().unwrap_or_default(),
                            |f, v| f.email = contracts::domain::common::non_blank(&v),
                        )}
                        {register_field(form, is_loading, "password", "Contraseña", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        <div class="form-group">
                            <label for="confirmation">"Confirmar contraseña"</label>
                            <input
                                type="password"
                                id="confirmation"
                                prop:value=move || confirmation.get()
                                on:input=move |ev| confirmation.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Registrando..." } else { "Registrarse" }}
                        </button>
                    </form>

                    <p class="login-switch">
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            on_back.run(());
                        }>"Volver a iniciar sesión"</a>
                    </p>
                </Show>
            </div>
        </div>
    }
}

fn register_field(
    form: RwSignal<RegisterRequest>,
    is_loading: RwSignal<bool>,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    get: fn(&RegisterRequest) -> String,
    set: fn(&mut RegisterRequest, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
                disabled=move || is_loading.get()
            />
        </div>
    }
}

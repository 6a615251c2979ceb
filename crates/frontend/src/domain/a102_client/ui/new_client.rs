use contracts::domain::a102_client::CreateClientRequest;
use leptos::prelude::*;

use crate::layout::global_context::use_pos_context;
use crate::shared::icons::icon;

/// Inline sub-form for registering a customer without leaving the dialog.
#[component]
pub fn NewClientForm() -> impl IntoView {
    let ctx = use_pos_context();

    let is_open = move || ctx.session.with(|s| s.checkout().client().is_new_client_open());
    let is_saving = move || ctx.session.with(|s| s.checkout().client().is_saving());

    let field = move |id: &'static str,
                      label: &'static str,
                      input_type: &'static str,
                      get: fn(&CreateClientRequest) -> &str,
                      set: fn(&mut CreateClientRequest, String)| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>{label}</label>
                <input
                    id=id
                    type=input_type
                    class="form__input"
                    prop:value=move || {
                        ctx.session.with(|s| get(s.checkout().client().draft()).to_string())
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.session
                            .update(|s| s.checkout_mut().edit_new_client(|d| set(d, value)));
                    }
                />
            </div>
        }
    };

    view! {
        <div
            id="nuevoClienteForm"
            class="nuevo-cliente-form"
            style:display=move || if is_open() { "block" } else { "none" }
        >
            {field(
                "nuevo_cliente_nombre",
                "Nombre completo *",
                "text",
                |d| d.nombre_completo.as_str(),
                |d, v| d.nombre_completo = v,
            )}
            {field("nuevo_cliente_telefono", "Teléfono", "tel", |d| d.telefono.as_str(), |d, v| d.telefono = v)}
            {field("nuevo_cliente_ci", "CI/NIT", "text", |d| d.ci_nit.as_str(), |d, v| d.ci_nit = v)}
            {field("nuevo_cliente_email", "Email", "email", |d| d.email.as_str(), |d, v| d.email = v)}
            <button
                type="button"
                class="button button--primary"
                disabled=is_saving
                on:click=move |_| ctx.create_client()
            >
                {icon("save")}
                {move || if is_saving() { "Guardando..." } else { "Guardar cliente" }}
            </button>
        </div>
    }
}

use contracts::domain::a103_sale::{ConsumptionMode, DocumentType};
use leptos::prelude::*;

use crate::domain::a102_client::ui::{ClientSearch, NewClientForm};
use crate::layout::global_context::use_pos_context;
use crate::shared::components::ChoiceGroup;
use crate::shared::format::format_bs;
use crate::shared::icons::icon;
use crate::shared::modal::PosModal;

/// Checkout dialog: totals snapshot, customer, payment method, consumption
/// mode and document type.
#[component]
pub fn PaymentModal() -> impl IntoView {
    let ctx = use_pos_context();
    let methods = ctx.config.with_value(|c| c.metodos_pago.clone());

    let visible = Signal::derive(move || ctx.session.with(|s| s.checkout().is_modal_open()));
    let is_submitting = move || ctx.session.with(|s| s.checkout().is_submitting());
    let totals = move || ctx.session.with(|s| s.checkout().totals());
    let error = move || ctx.session.with(|s| s.checkout().error().map(str::to_string));
    let is_invoice = move || ctx.session.with(|s| s.checkout().document_type().is_invoice());

    let payment_method = move || {
        ctx.session
            .with(|s| s.checkout().payment_method_id().unwrap_or_default().to_string())
    };
    let consumption_mode = Signal::derive(move || {
        ctx.session
            .with(|s| s.checkout().consumption_mode().as_str().to_string())
    });
    let document_type = Signal::derive(move || {
        ctx.session
            .with(|s| s.checkout().document_type().as_str().to_string())
    });

    let consumption_options = ConsumptionMode::ALL
        .iter()
        .map(|m| (m.as_str(), m.label()))
        .collect::<Vec<_>>();
    let document_options = DocumentType::ALL
        .iter()
        .map(|d| (d.as_str(), d.label()))
        .collect::<Vec<_>>();

    view! {
        <PosModal
            title="Procesar pago"
            visible=visible
            on_close=Callback::new(move |_| ctx.cancel_checkout())
            class="payment-modal"
        >
            <form
                id="paymentForm"
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    ctx.submit_sale();
                }
            >
                <div class="modal-totals">
                    <div class="modal-totals__row">
                        <span>"Subtotal"</span>
                        <span class="modal-subtotal">{move || format_bs(totals().subtotal)}</span>
                    </div>
                    <div class="modal-totals__row modal-totals__row--total">
                        <span>"Total"</span>
                        <span class="modal-total">{move || format_bs(totals().total)}</span>
                    </div>
                </div>

                <ClientSearch />
                <NewClientForm />

                <div class="form__group">
                    <label class="form__label" for="metodo_pago_select">"Método de pago"</label>
                    <select
                        id="metodo_pago_select"
                        class="form__select"
                        prop:value=payment_method
                        on:change=move |ev| ctx.set_payment_method(event_target_value(&ev))
                    >
                        <option value="">"Seleccione método de pago"</option>
                        {methods
                            .into_iter()
                            .map(|m| view! { <option value=m.id>{m.nombre}</option> })
                            .collect_view()}
                    </select>
                </div>

                <ChoiceGroup
                    label="Modo de consumo"
                    name="modo_consumo"
                    options=consumption_options
                    value=consumption_mode
                    disabled=Signal::derive(is_submitting)
                    on_change=Callback::new(move |v: String| {
                        if let Some(mode) = ConsumptionMode::parse(&v) {
                            ctx.set_consumption_mode(mode);
                        }
                    })
                />

                <ChoiceGroup
                    label="Tipo de documento"
                    name="tipo_documento"
                    options=document_options
                    value=document_type
                    disabled=Signal::derive(is_submitting)
                    on_change=Callback::new(move |v: String| {
                        if let Some(document_type) = DocumentType::parse(&v) {
                            ctx.set_document_type(document_type);
                        }
                    })
                />

                <Show when=is_invoice>
                    <p class="form__hint invoice-hint">
                        "Para factura el cliente debe tener NIT/CI registrado. No se permite Mostrador."
                    </p>
                </Show>

                {move || error().map(|e| view! { <div class="warning-box">{e}</div> })}

                <div class="modal-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=is_submitting
                        on:click=move |_| ctx.cancel_checkout()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary btn-confirm"
                        disabled=is_submitting
                    >
                        {icon("check")}
                        {move || if is_submitting() { "Procesando..." } else { "Confirmar pago" }}
                    </button>
                </div>
            </form>
        </PosModal>
    }
}

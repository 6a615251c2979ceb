use leptos::prelude::*;

use crate::layout::global_context::use_pos_context;
use crate::shared::api_utils::page_origin;
use crate::shared::icons::icon;
use crate::shared::modal::PosModal;

/// Confirmation shown after the server accepted a sale.
#[component]
pub fn SaleCompletedModal() -> impl IntoView {
    let ctx = use_pos_context();

    let sale = move || ctx.session.with(|s| s.checkout().completed().cloned());
    let visible = Signal::derive(move || sale().is_some());
    let reference = move || sale().and_then(|s| s.reference()).unwrap_or_default();
    let total = move || sale().map(|s| s.total).unwrap_or_default();
    // no link without an id to point at
    let detail_href = move || {
        sale().and_then(|s| s.venta_id).map(|id| {
            ctx.config
                .with_value(|c| c.sale_detail_href(&id, &page_origin()))
        })
    };
    let has_detail = move || detail_href().is_some();

    view! {
        <PosModal
            title="Venta completada"
            visible=visible
            on_close=Callback::new(move |_| ctx.dismiss_completed())
            class="venta-completada-modal"
        >
            <div class="venta-completada">
                {icon("check")}
                <p class="venta-completada__id">
                    "Venta registrada "
                    <strong id="ventaCompletadaId">{reference}</strong>
                </p>
                <p class="venta-completada__total">
                    "Total: Bs. "
                    <span id="ventaCompletadaTotal">{total}</span>
                </p>
                <div class="modal-actions">
                    <Show when=has_detail>
                        <a
                            id="btnVerImprimirTicket"
                            class="button button--secondary"
                            href=detail_href
                            target="_blank"
                        >
                            {icon("printer")}
                            "Ver / Imprimir ticket"
                        </a>
                    </Show>
                    <button
                        type="button"
                        class="button button--primary"
                        on:click=move |_| ctx.dismiss_completed()
                    >
                        "Nueva venta"
                    </button>
                </div>
            </div>
        </PosModal>
    }
}

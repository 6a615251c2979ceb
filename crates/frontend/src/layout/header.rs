use leptos::prelude::*;

use crate::layout::global_context::use_pos_context;
use crate::shared::icons::icon;

#[component]
pub fn PosHeader() -> impl IntoView {
    let ctx = use_pos_context();

    let ticket = move || ctx.session.with(|s| s.ticket().label());
    let units = move || ctx.session.with(|s| s.cart().unit_count());

    view! {
        <header class="header pos-header">
            <div class="header__content">
                <span class="header__title">"Punto de Venta"</span>
            </div>
            <div class="header__actions">
                <span class="ticket-number">{ticket}</span>
                <span class="header__badge" title="Productos en el pedido">
                    {icon("cart")}
                    {units}
                </span>
            </div>
        </header>
    }
}

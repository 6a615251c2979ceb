use contracts::domain::a101_cart::LineItem;
use leptos::prelude::*;

use crate::layout::global_context::use_pos_context;
use crate::shared::format::format_bs;
use crate::shared::icons::icon;

/// Order column: line items, totals and the pay button.
#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_pos_context();

    let items = move || ctx.session.with(|s| s.cart().items().to_vec());
    let totals = move || ctx.session.with(|s| s.cart().totals());
    let is_empty = move || ctx.session.with(|s| s.cart().is_empty());
    let ticket = move || ctx.session.with(|s| s.ticket().label());

    view! {
        <section class="order-panel">
            <div class="order-header">
                <h2 class="order-title">{ticket}</h2>
            </div>

            <div class="order-columns">
                <div class="col-name">"Producto"</div>
                <div class="col-qty">"Cant."</div>
                <div class="col-price">"Precio"</div>
                <div class="col-total">"Total"</div>
                <div class="col-actions"></div>
            </div>

            <div class="order-items">
                <For
                    each=items
                    key=|item| (item.id.clone(), item.quantity)
                    children=move |item| view! { <CartLine item=item /> }
                />
            </div>

            <div
                class="empty-order"
                style:display=move || if is_empty() { "block" } else { "none" }
            >
                {icon("cart")}
                <p>"No hay productos en el pedido"</p>
            </div>

            <div class="order-totals">
                <div class="order-totals__row">
                    <span>"Subtotal"</span>
                    <span class="subtotal-amount">{move || format_bs(totals().subtotal)}</span>
                </div>
                <div class="order-totals__row order-totals__row--total">
                    <span>"Total"</span>
                    <span class="total-amount">{move || format_bs(totals().total)}</span>
                </div>
            </div>

            <button
                type="button"
                class="button button--primary btn-pagar"
                on:click=move |_| ctx.open_checkout()
            >
                {icon("payments")}
                "Pagar"
            </button>
        </section>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let ctx = use_pos_context();
    let line_total = item.line_total();
    let id_minus = item.id.clone();
    let id_plus = item.id.clone();
    let id_remove = item.id.clone();

    view! {
        <div class="order-item" data-product-id=item.id.clone()>
            <div class="col-name" title=item.name.clone()>{item.name.clone()}</div>
            <div class="col-qty">
                <div class="qty-controls">
                    <button
                        type="button"
                        class="btn-qty-minus"
                        title="Disminuir cantidad"
                        on:click=move |_| ctx.change_quantity(&id_minus, -1)
                    >
                        "-"
                    </button>
                    <span class="qty-value">{item.quantity}</span>
                    <button
                        type="button"
                        class="btn-qty-plus"
                        title="Aumentar cantidad"
                        on:click=move |_| ctx.change_quantity(&id_plus, 1)
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="col-price">{format_bs(item.price)}</div>
            <div class="col-total">{format_bs(line_total)}</div>
            <div class="col-actions">
                <button
                    type="button"
                    class="btn-remove"
                    title="Eliminar producto"
                    on:click=move |_| ctx.remove_from_cart(&id_remove)
                >
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}

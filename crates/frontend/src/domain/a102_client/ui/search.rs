use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::domain::a102_client::ClientDropdown;
use crate::layout::global_context::use_pos_context;
use crate::shared::icons::icon;

const EMPTY_RESULTS: &str = "No hay clientes. Use el botón + para crear uno.";
const SEARCH_FAILED: &str = "Error al buscar.";

/// Customer field with search-as-you-type dropdown, walk-in shortcut and the
/// "+" toggle for the new-customer sub-form.
#[component]
pub fn ClientSearch() -> impl IntoView {
    let ctx = use_pos_context();
    let wrap_ref = NodeRef::<html::Div>::new();

    // Clicks outside the field and dropdown close the dropdown
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(wrap) = wrap_ref.get_untracked() else {
                return;
            };
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !wrap.contains(target.as_ref()) {
                ctx.dismiss_client_dropdown();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let query = move || ctx.session.with(|s| s.checkout().client().query().to_string());
    let dropdown = move || ctx.session.with(|s| s.checkout().client().dropdown().clone());
    let has_walk_in = ctx.session.with_untracked(|s| s.walk_in_id().is_some());

    view! {
        <div class="form__group">
            <label class="form__label" for="cliente_search">"Cliente"</label>
            <div class="cliente-search-row">
                <div class="cliente-search-wrap" node_ref=wrap_ref>
                    <input
                        id="cliente_search"
                        type="text"
                        class="form__input"
                        autocomplete="off"
                        placeholder="Buscar por nombre, teléfono o CI/NIT..."
                        prop:value=query
                        on:input=move |ev| ctx.on_client_query(event_target_value(&ev))
                        on:focus=move |_| ctx.on_client_focus()
                    />
                    <div
                        class="cliente-dropdown"
                        style:display=move || {
                            if dropdown().is_visible() { "block" } else { "none" }
                        }
                    >
                        {move || match dropdown() {
                            ClientDropdown::Results(clients) => clients
                                .into_iter()
                                .map(|client| {
                                    let label = client.display_label();
                                    view! {
                                        <div
                                            class="cliente-dropdown-item"
                                            data-id=client.id.clone()
                                            on:click=move |_| ctx.select_client(&client)
                                        >
                                            {label}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any(),
                            ClientDropdown::NoResults => view! {
                                <div class="cliente-dropdown-empty">{EMPTY_RESULTS}</div>
                            }
                            .into_any(),
                            ClientDropdown::Failed => view! {
                                <div class="cliente-dropdown-empty">{SEARCH_FAILED}</div>
                            }
                            .into_any(),
                            ClientDropdown::Hidden => ().into_any(),
                        }}
                    </div>
                </div>
                <Show when=move || has_walk_in>
                    <button
                        type="button"
                        class="button button--secondary btn-mostrador"
                        title="Venta Mostrador"
                        on:click=move |_| ctx.select_walk_in()
                    >
                        {icon("store")}
                        "Venta Mostrador"
                    </button>
                </Show>
                <button
                    type="button"
                    class="button button--icon btn-nuevo-cliente"
                    title="Nuevo cliente"
                    on:click=move |_| ctx.toggle_new_client()
                >
                    {icon("user-plus")}
                </button>
            </div>
        </div>
    }
}

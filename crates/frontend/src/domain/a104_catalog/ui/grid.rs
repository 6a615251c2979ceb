use contracts::domain::a104_catalog::{CatalogProduct, Category};
use leptos::prelude::*;

use crate::domain::a104_catalog::ALL_CATEGORIES;
use crate::layout::global_context::use_pos_context;
use crate::shared::format::format_bs;
use crate::shared::icons::icon;

/// Search box, category tabs and the product cards.
///
/// Cards are rendered once; filtering only toggles their visibility.
#[component]
pub fn CatalogPanel() -> impl IntoView {
    let ctx = use_pos_context();
    let products = ctx.config.with_value(|c| c.productos.clone());
    let categories = ctx.config.with_value(|c| c.categorias.clone());

    let all_products = StoredValue::new(products.clone());
    let nothing_found = move || {
        all_products.with_value(|p| !p.is_empty() && ctx.catalog.with(|f| f.visible_count(p) == 0))
    };

    let apply_search = move || ctx.catalog.update(|f| f.apply_search());

    view! {
        <section class="catalog-panel">
            <div class="catalog-search">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Buscar producto..."
                    prop:value=move || ctx.catalog.with(|f| f.search_input().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.catalog.update(|f| f.set_search_input(text));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            apply_search();
                        }
                    }
                />
                <button
                    type="button"
                    class="button button--secondary search-btn"
                    title="Buscar"
                    on:click=move |_| apply_search()
                >
                    {icon("search")}
                </button>
            </div>

            <CategoryTabs categories=categories />

            <div class="products-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
            <Show when=nothing_found>
                <p class="products-empty">"No se encontraron productos"</p>
            </Show>
        </section>
    }
}

#[component]
fn CategoryTabs(categories: Vec<Category>) -> impl IntoView {
    let ctx = use_pos_context();

    let tab = move |id: String, label: String| {
        let id_for_class = id.clone();
        view! {
            <button
                type="button"
                class="category-tab"
                class:active=move || ctx.catalog.with(|f| f.is_active_tab(&id_for_class))
                on:click=move |_| ctx.catalog.update(|f| f.select_category(&id))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="category-tabs">
            {tab(ALL_CATEGORIES.to_string(), "Todos".to_string())}
            {categories
                .into_iter()
                .map(|c| tab(c.id, c.nombre))
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductCard(product: CatalogProduct) -> impl IntoView {
    let ctx = use_pos_context();
    let product = StoredValue::new(product);
    let visible = move || product.with_value(|p| ctx.catalog.with(|f| f.is_visible(p)));
    let (name, price, promo) =
        product.with_value(|p| (p.nombre.clone(), p.precio, p.tiene_promo));
    let title = name.clone();

    view! {
        <div
            class="product-card"
            title=title
            style:display=move || if visible() { "block" } else { "none" }
            on:click=move |_| product.with_value(|p| ctx.add_to_cart(p))
        >
            {promo.then(|| view! { <span class="promo-badge">"Promo"</span> })}
            <div class="product-name">{name}</div>
            <div class="product-price">{format_bs(price)}</div>
        </div>
    }
}

use leptos::prelude::*;

use crate::layout::global_context::PosContext;
use crate::layout::PosLayout;
use crate::shared::notices::NoticeStack;
use crate::shared::page_data::load_pos_config;
use crate::shared::storage::default_store;

#[component]
pub fn App() -> impl IntoView {
    // Host page data and local storage are read once at mount.
    let ctx = PosContext::new(load_pos_config(), default_store());
    provide_context(ctx);

    view! {
        <PosLayout />
        <NoticeStack service=ctx.notices />
    }
}

pub mod global_context;
pub mod header;

use leptos::prelude::*;

use crate::domain::a101_cart::ui::CartPanel;
use crate::domain::a103_sale::ui::{PaymentModal, SaleCompletedModal};
use crate::domain::a104_catalog::ui::CatalogPanel;
use header::PosHeader;

/// Register screen.
///
/// ```text
/// +------------------------------------------+
/// |              PosHeader                   |
/// +------------------------------------------+
/// |        Catalog          |     Order      |
/// +------------------------------------------+
/// ```
///
/// Both dialogs stay mounted and toggle their own visibility.
#[component]
pub fn PosLayout() -> impl IntoView {
    view! {
        <div class="pos-layout">
            <PosHeader />
            <div class="pos-body">
                <CatalogPanel />
                <CartPanel />
            </div>
            <PaymentModal />
            <SaleCompletedModal />
        </div>
    }
}

//! Everything the register screen mutates, behind one owner.
//!
//! Cart, checkout dialog and ticket preview change together when a sale
//! completes, so they live in a single value the UI keeps in one signal.

use std::sync::Arc;

use contracts::domain::a101_cart::{Cart, CartTotals};
use contracts::domain::a103_sale::{DocumentType, SaleRequest, SaleResponse};
use contracts::domain::a104_catalog::CatalogProduct;

use crate::domain::a101_cart::CartStore;
use crate::domain::a103_sale::{Checkout, CheckoutError, CompletedSale, TicketCounter};
use crate::shared::storage::KeyValueStore;

pub struct PosSession {
    cart: CartStore,
    checkout: Checkout,
    ticket: TicketCounter,
    walk_in_id: Option<String>,
}

impl PosSession {
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        ticket_seed: u64,
        walk_in_id: Option<String>,
    ) -> Self {
        Self {
            cart: CartStore::load(storage),
            checkout: Checkout::default(),
            ticket: TicketCounter::new(ticket_seed),
            walk_in_id,
        }
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn checkout_mut(&mut self) -> &mut Checkout {
        &mut self.checkout
    }

    pub fn ticket(&self) -> TicketCounter {
        self.ticket
    }

    pub fn walk_in_id(&self) -> Option<&str> {
        self.walk_in_id.as_deref()
    }

    /// Product card clicked. Returns the new quantity of that line.
    pub fn add_product(&mut self, product: &CatalogProduct) -> u32 {
        self.cart.add(&product.id, &product.nombre, product.precio)
    }

    pub fn open_checkout(&mut self) -> Result<CartTotals, CheckoutError> {
        self.checkout.open(self.cart.cart())
    }

    pub fn select_walk_in(&mut self) -> Result<(), CheckoutError> {
        self.checkout.select_walk_in(self.walk_in_id.as_deref())
    }

    /// Returns whether a walk-in selection was dropped.
    pub fn set_document_type(&mut self, document_type: DocumentType) -> bool {
        self.checkout
            .set_document_type(document_type, self.walk_in_id.as_deref())
    }

    pub fn begin_sale(&mut self) -> Result<SaleRequest, CheckoutError> {
        self.checkout
            .begin_submit(self.cart.cart(), self.walk_in_id.as_deref())
    }

    /// Apply the sale response. A successful sale empties the cart and moves
    /// the ticket preview forward.
    pub fn finish_sale(
        &mut self,
        outcome: Result<SaleResponse, String>,
    ) -> Result<CompletedSale, CheckoutError> {
        let sale = self.checkout.finish_submit(outcome)?;
        self.cart.clear();
        let next = self.ticket.advance();
        log::info!(
            "Sale {} saved, next ticket {}",
            sale.reference().as_deref().unwrap_or("without id"),
            next
        );
        Ok(sale)
    }
}

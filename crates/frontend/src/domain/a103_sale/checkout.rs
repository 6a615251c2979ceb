//! Payment dialog state machine.
//!
//! ```text
//!  Idle ──open──▶ ModalOpen ──begin_submit──▶ Submitting
//!   ▲               ▲   │                        │
//!   │               │   └──close──▶ Idle          ├─ failure ──▶ ModalOpen (form kept)
//!   └─dismiss── Completed ◀──────── success ─────┘
//! ```
//!
//! Only one submission can be in flight: `begin_submit` refuses while the
//! phase is `Submitting`.

use contracts::domain::a101_cart::{Cart, CartTotals};
use contracts::domain::a102_client::{
    ClientSummary, CreateClientRequest, CreateClientResponse, CreatedClient,
};
use contracts::domain::a103_sale::{ConsumptionMode, DocumentType, SaleRequest, SaleResponse};
use contracts::shared::is_walk_in_id;

use super::error::CheckoutError;
use crate::domain::a102_client::state::{ClientPicker, WALK_IN_LABEL};

/// Confirmation data for a sale the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSale {
    /// `None` when the server confirmed the sale without an id.
    pub venta_id: Option<String>,
    /// Total as reported by the server, e.g. `"12.00"`.
    pub total: String,
}

impl CompletedSale {
    /// `#42`, or `None` without a sale id.
    pub fn reference(&self) -> Option<String> {
        self.venta_id.as_ref().map(|id| format!("#{}", id))
    }
}

/// Customer creation request tagged with the form generation that sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingClient {
    pub generation: u64,
    pub request: CreateClientRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    ModalOpen,
    Submitting,
    Completed(CompletedSale),
}

#[derive(Debug, Clone, Default)]
pub struct Checkout {
    phase: CheckoutPhase,
    totals: CartTotals,
    client: ClientPicker,
    payment_method_id: Option<String>,
    consumption_mode: ConsumptionMode,
    document_type: DocumentType,
    error: Option<String>,
}

impl Checkout {
    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn phase(&self) -> &CheckoutPhase {
        &self.phase
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.phase, CheckoutPhase::ModalOpen | CheckoutPhase::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }

    pub fn completed(&self) -> Option<&CompletedSale> {
        match &self.phase {
            CheckoutPhase::Completed(sale) => Some(sale),
            _ => None,
        }
    }

    /// Cart totals captured when the dialog opened.
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    pub fn client(&self) -> &ClientPicker {
        &self.client
    }

    pub fn payment_method_id(&self) -> Option<&str> {
        self.payment_method_id.as_deref()
    }

    pub fn consumption_mode(&self) -> ConsumptionMode {
        self.consumption_mode
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Inline message shown inside the dialog.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // ------------------------------------------------------------------
    // Dialog lifecycle
    // ------------------------------------------------------------------

    /// Pay action: open the dialog with a snapshot of the cart totals.
    pub fn open(&mut self, cart: &Cart) -> Result<CartTotals, CheckoutError> {
        if self.is_submitting() {
            return Err(CheckoutError::RequestInFlight);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.reset_form();
        self.totals = cart.totals();
        self.phase = CheckoutPhase::ModalOpen;
        log::debug!("Checkout opened, total {:.2}", self.totals.total);
        Ok(self.totals)
    }

    /// Cancel: close the dialog and clear the form. Refused while a
    /// submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        if self.is_modal_open() {
            self.phase = CheckoutPhase::Idle;
        }
        self.reset_form();
        true
    }

    /// Hide the success confirmation.
    pub fn dismiss_completed(&mut self) {
        if self.completed().is_some() {
            self.phase = CheckoutPhase::Idle;
        }
    }

    fn reset_form(&mut self) {
        self.client.reset();
        self.payment_method_id = None;
        self.consumption_mode = ConsumptionMode::default();
        self.document_type = DocumentType::default();
        self.error = None;
    }

    fn fail<T>(&mut self, error: CheckoutError) -> Result<T, CheckoutError> {
        self.error = Some(error.to_string());
        Err(error)
    }

    // ------------------------------------------------------------------
    // Form fields
    // ------------------------------------------------------------------

    pub fn set_payment_method(&mut self, id: String) {
        let id = id.trim().to_string();
        self.payment_method_id = (!id.is_empty()).then_some(id);
    }

    pub fn set_consumption_mode(&mut self, mode: ConsumptionMode) {
        self.consumption_mode = mode;
    }

    /// Switching to invoice drops a walk-in selection. Any other selection is
    /// kept in both directions. Returns whether the selection was dropped.
    pub fn set_document_type(
        &mut self,
        document_type: DocumentType,
        walk_in_id: Option<&str>,
    ) -> bool {
        self.document_type = document_type;
        let walk_in_selected = self
            .client
            .selected_id()
            .is_some_and(|id| is_walk_in_id(walk_in_id, id));
        if document_type.is_invoice() && walk_in_selected {
            self.client.clear_selection();
            return true;
        }
        false
    }

    // ------------------------------------------------------------------
    // Customer search
    // ------------------------------------------------------------------

    /// Text typed in the customer field. Returns the search generation to
    /// run after the debounce delay.
    pub fn type_client_query(&mut self, text: String) -> Option<u64> {
        self.is_modal_open().then(|| self.client.type_query(text))
    }

    /// Immediate search (field focused).
    pub fn schedule_client_search(&mut self) -> Option<u64> {
        self.is_modal_open().then(|| self.client.schedule_search())
    }

    pub fn pending_client_query(&self, generation: u64) -> Option<String> {
        if !self.is_modal_open() {
            return None;
        }
        self.client.pending_query(generation)
    }

    pub fn apply_client_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<ClientSummary>, String>,
    ) -> bool {
        self.is_modal_open() && self.client.apply_search(generation, outcome)
    }

    pub fn select_client(&mut self, client: &ClientSummary) {
        self.client.select(client);
    }

    pub fn dismiss_client_dropdown(&mut self) {
        self.client.hide_dropdown();
    }

    /// "Venta Mostrador" shortcut.
    pub fn select_walk_in(&mut self, walk_in_id: Option<&str>) -> Result<(), CheckoutError> {
        let Some(walk_in_id) = walk_in_id else {
            return self.fail(CheckoutError::WalkInUnavailable);
        };
        if self.document_type.is_invoice() {
            return self.fail(CheckoutError::InvoiceRequiresNamedClient);
        }
        self.client
            .select_with_label(walk_in_id.to_string(), WALK_IN_LABEL.to_string());
        self.client.show_new_client(false);
        self.error = None;
        Ok(())
    }

    // ------------------------------------------------------------------
    // New customer sub-form
    // ------------------------------------------------------------------

    pub fn show_new_client(&mut self, open: bool) {
        self.client.show_new_client(open);
    }

    pub fn edit_new_client(&mut self, edit: impl FnOnce(&mut CreateClientRequest)) {
        self.client.edit_draft(edit);
    }

    pub fn begin_create_client(&mut self) -> Result<PendingClient, CheckoutError> {
        if !self.is_modal_open() {
            return Err(CheckoutError::ModalClosed);
        }
        if self.client.is_saving() {
            return Err(CheckoutError::RequestInFlight);
        }
        let Some(request) = self.client.draft().normalized() else {
            return self.fail(CheckoutError::MissingClientName);
        };
        let generation = self.client.begin_create();
        self.error = None;
        Ok(PendingClient {
            generation,
            request,
        })
    }

    /// Apply the creation response. On failure the sub-form stays open with
    /// its contents. A response for a form that was closed or reset since the
    /// request was sent is discarded.
    pub fn finish_create_client(
        &mut self,
        generation: u64,
        outcome: Result<CreateClientResponse, String>,
    ) -> Result<CreatedClient, CheckoutError> {
        if !self.is_modal_open() || !self.client.is_current_create(generation) {
            log::debug!("Discarding customer creation response #{}", generation);
            return Err(CheckoutError::Superseded);
        }
        self.client.set_saving(false);
        match outcome {
            Ok(CreateClientResponse {
                success: true,
                cliente: Some(created),
                ..
            }) => {
                self.client.adopt_created(&created);
                Ok(created)
            }
            Ok(response) => {
                let message = response
                    .error
                    .unwrap_or_else(|| "No se pudo crear el cliente".to_string());
                self.fail(CheckoutError::Server(message))
            }
            Err(detail) => self.fail(CheckoutError::ClientTransport(detail)),
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validate the form and move to `Submitting`. Nothing is sent when this
    /// returns an error.
    pub fn begin_submit(
        &mut self,
        cart: &Cart,
        walk_in_id: Option<&str>,
    ) -> Result<SaleRequest, CheckoutError> {
        match self.phase {
            CheckoutPhase::Submitting => return Err(CheckoutError::RequestInFlight),
            CheckoutPhase::ModalOpen => {}
            _ => return Err(CheckoutError::ModalClosed),
        }
        if cart.is_empty() {
            return self.fail(CheckoutError::EmptyCart);
        }

        let (Some(client_id), Some(payment_method_id)) = (
            self.client.selected_id().map(str::to_string),
            self.payment_method_id.clone(),
        ) else {
            return self.fail(CheckoutError::MissingSelection);
        };

        if self.document_type.is_invoice() && is_walk_in_id(walk_in_id, &client_id) {
            return self.fail(CheckoutError::InvoiceRequiresNamedClient);
        }

        self.error = None;
        self.phase = CheckoutPhase::Submitting;
        log::debug!("Submitting sale with {} line(s)", cart.item_count());

        Ok(SaleRequest {
            cliente_id: client_id,
            metodo_pago_id: payment_method_id,
            modo_consumo: self.consumption_mode,
            tipo_documento: self.document_type,
            items: cart.items().to_vec(),
        })
    }

    /// Apply the server answer. Success resets the form and shows the
    /// confirmation; any failure returns to the open dialog untouched.
    pub fn finish_submit(
        &mut self,
        outcome: Result<SaleResponse, String>,
    ) -> Result<CompletedSale, CheckoutError> {
        if !self.is_submitting() {
            return Err(CheckoutError::ModalClosed);
        }
        match outcome {
            Ok(response) if response.success => {
                let sale = CompletedSale {
                    venta_id: response.venta_id.filter(|id| !id.is_empty()),
                    total: response.total.unwrap_or_else(|| "0.00".to_string()),
                };
                if sale.venta_id.is_none() {
                    log::warn!("Sale confirmed without venta_id");
                }
                self.reset_form();
                self.phase = CheckoutPhase::Completed(sale.clone());
                log::debug!("Sale {:?} completed", sale.venta_id);
                Ok(sale)
            }
            Ok(response) => {
                self.phase = CheckoutPhase::ModalOpen;
                let message = response
                    .error
                    .unwrap_or_else(|| "No se pudo procesar la venta".to_string());
                self.fail(CheckoutError::Server(message))
            }
            Err(detail) => {
                self.phase = CheckoutPhase::ModalOpen;
                self.fail(CheckoutError::SaleTransport(detail))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALK_IN: Option<&str> = Some("1");

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add("7", "Salteña", 12.00);
        cart
    }

    fn named_client() -> ClientSummary {
        ClientSummary {
            id: "15".into(),
            nombre_completo: "Luis Paz".into(),
            telefono: "70011122".into(),
            ci_nit: "1234567".into(),
        }
    }

    fn ready_checkout(cart: &Cart) -> Checkout {
        let mut checkout = Checkout::default();
        checkout.open(cart).unwrap();
        checkout.select_client(&named_client());
        checkout.set_payment_method("2".into());
        checkout
    }

    #[test]
    fn test_open_rejects_empty_cart() {
        let mut checkout = Checkout::default();
        assert_eq!(checkout.open(&Cart::new()), Err(CheckoutError::EmptyCart));
        assert_eq!(checkout.phase(), &CheckoutPhase::Idle);
    }

    #[test]
    fn test_open_snapshots_totals() {
        let mut cart = cart_with_one_item();
        cart.add("7", "Salteña", 12.00);
        let mut checkout = Checkout::default();
        let totals = checkout.open(&cart).unwrap();
        assert_eq!(totals.subtotal, 24.0);
        assert_eq!(totals.total, 24.0);
        assert!(checkout.is_modal_open());
    }

    #[test]
    fn test_submit_requires_client_and_payment_method() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();

        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::MissingSelection)
        );
        checkout.select_client(&named_client());
        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::MissingSelection)
        );
        assert_eq!(checkout.phase(), &CheckoutPhase::ModalOpen);
        assert!(checkout.error().is_some());

        checkout.set_payment_method("2".into());
        let request = checkout.begin_submit(&cart, WALK_IN).unwrap();
        assert_eq!(request.cliente_id, "15");
        assert_eq!(request.metodo_pago_id, "2");
        assert_eq!(request.items, cart.items().to_vec());
        assert!(checkout.error().is_none());
    }

    #[test]
    fn test_submit_rejects_empty_cart_before_network() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        assert_eq!(
            checkout.begin_submit(&Cart::new(), WALK_IN),
            Err(CheckoutError::EmptyCart)
        );
        assert!(!checkout.is_submitting());
    }

    fn walk_in_from_search() -> ClientSummary {
        ClientSummary {
            id: "1".into(),
            nombre_completo: "Mostrador".into(),
            telefono: String::new(),
            ci_nit: String::new(),
        }
    }

    #[test]
    fn test_invoice_with_walk_in_is_rejected() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.set_document_type(DocumentType::Factura, WALK_IN);
        // the walk-in customer can still be picked from search results
        checkout.select_client(&walk_in_from_search());
        checkout.set_payment_method("1".into());

        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::InvoiceRequiresNamedClient)
        );
        assert_eq!(checkout.phase(), &CheckoutPhase::ModalOpen);

        // a ticket for the walk-in customer is fine
        checkout.set_document_type(DocumentType::Ticket, WALK_IN);
        let request = checkout.begin_submit(&cart, WALK_IN).unwrap();
        assert_eq!(request.cliente_id, "1");
        assert_eq!(request.tipo_documento, DocumentType::Ticket);
    }

    #[test]
    fn test_walk_in_shortcut_refused_for_invoice() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.set_document_type(DocumentType::Factura, WALK_IN);

        assert_eq!(
            checkout.select_walk_in(WALK_IN),
            Err(CheckoutError::InvoiceRequiresNamedClient)
        );
        assert_eq!(checkout.client().selected_id(), None);
        assert_eq!(
            checkout.select_walk_in(None),
            Err(CheckoutError::WalkInUnavailable)
        );
    }

    #[test]
    fn test_walk_in_shortcut_selects_and_closes_sub_form() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);

        checkout.select_walk_in(WALK_IN).unwrap();
        assert_eq!(checkout.client().selected_id(), Some("1"));
        assert_eq!(checkout.client().query(), "Mostrador");
        assert!(!checkout.client().is_new_client_open());
    }

    #[test]
    fn test_leaving_invoice_keeps_named_client() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        assert!(!checkout.set_document_type(DocumentType::Factura, WALK_IN));
        checkout.set_document_type(DocumentType::Ticket, WALK_IN);
        assert_eq!(checkout.client().selected_id(), Some("15"));

        checkout.set_document_type(DocumentType::Factura, WALK_IN);
        let request = checkout.begin_submit(&cart, WALK_IN).unwrap();
        assert_eq!(request.tipo_documento, DocumentType::Factura);
    }

    #[test]
    fn test_invoice_clears_walk_in_selection() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.select_walk_in(WALK_IN).unwrap();
        checkout.set_payment_method("1".into());

        assert!(checkout.set_document_type(DocumentType::Factura, Some(" 1 ")));
        assert_eq!(checkout.document_type(), DocumentType::Factura);
        assert_eq!(checkout.client().selected_id(), None);
        assert_eq!(checkout.client().query(), "");
        assert_eq!(checkout.payment_method_id(), Some("1"));
        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::MissingSelection)
        );

        // without a configured walk-in id nothing is cleared
        checkout.set_document_type(DocumentType::Ticket, None);
        checkout.select_walk_in(WALK_IN).unwrap();
        assert!(!checkout.set_document_type(DocumentType::Factura, None));
        assert_eq!(checkout.client().selected_id(), Some("1"));
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        checkout.begin_submit(&cart, WALK_IN).unwrap();

        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::RequestInFlight)
        );
        assert!(!checkout.close());
        assert!(checkout.is_submitting());
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::ModalClosed)
        );
    }

    #[test]
    fn test_success_resets_form_and_shows_confirmation() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        checkout.set_consumption_mode(ConsumptionMode::Llevar);
        checkout.begin_submit(&cart, WALK_IN).unwrap();

        let sale = checkout
            .finish_submit(Ok(SaleResponse {
                success: true,
                venta_id: Some("42".into()),
                total: Some("12.00".into()),
                ..SaleResponse::default()
            }))
            .unwrap();

        assert_eq!(sale.reference().as_deref(), Some("#42"));
        assert_eq!(sale.total, "12.00");
        assert_eq!(checkout.completed(), Some(&sale));
        assert!(!checkout.is_modal_open());
        assert_eq!(checkout.client().selected_id(), None);
        assert_eq!(checkout.payment_method_id(), None);
        assert_eq!(checkout.consumption_mode(), ConsumptionMode::Local);

        checkout.dismiss_completed();
        assert_eq!(checkout.phase(), &CheckoutPhase::Idle);
    }

    #[test]
    fn test_success_without_sale_id_has_no_reference() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        checkout.begin_submit(&cart, WALK_IN).unwrap();

        let sale = checkout
            .finish_submit(Ok(SaleResponse {
                success: true,
                venta_id: Some(String::new()),
                total: Some("12.00".into()),
                ..SaleResponse::default()
            }))
            .unwrap();

        assert_eq!(sale.venta_id, None);
        assert_eq!(sale.reference(), None);
        assert_eq!(checkout.completed(), Some(&sale));
        assert_eq!(checkout.client().selected_id(), None);
    }

    #[test]
    fn test_server_failure_keeps_form_for_retry() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        checkout.set_document_type(DocumentType::Factura, WALK_IN);
        checkout.begin_submit(&cart, WALK_IN).unwrap();

        let err = checkout
            .finish_submit(Ok(SaleResponse {
                success: false,
                error: Some("Stock insuficiente para Salteña".into()),
                ..SaleResponse::default()
            }))
            .unwrap_err();

        assert_eq!(err, CheckoutError::Server("Stock insuficiente para Salteña".into()));
        assert_eq!(checkout.phase(), &CheckoutPhase::ModalOpen);
        assert_eq!(checkout.error(), Some("Error: Stock insuficiente para Salteña"));
        assert_eq!(checkout.client().selected_id(), Some("15"));
        assert_eq!(checkout.payment_method_id(), Some("2"));
        assert_eq!(checkout.document_type(), DocumentType::Factura);

        // retry goes through
        assert!(checkout.begin_submit(&cart, WALK_IN).is_ok());
    }

    #[test]
    fn test_transport_failure_returns_to_dialog() {
        let cart = cart_with_one_item();
        let mut checkout = ready_checkout(&cart);
        checkout.begin_submit(&cart, WALK_IN).unwrap();

        let err = checkout
            .finish_submit(Err("Failed to send request".into()))
            .unwrap_err();
        assert!(matches!(err, CheckoutError::SaleTransport(_)));
        assert_eq!(checkout.phase(), &CheckoutPhase::ModalOpen);
        assert_eq!(checkout.client().selected_id(), Some("15"));
    }

    #[test]
    fn test_close_resets_customer_state() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        let gen = checkout.type_client_query("lu".into()).unwrap();
        checkout.apply_client_search(gen, Ok(vec![named_client()]));
        checkout.show_new_client(true);
        assert!(checkout.client().dropdown().is_visible());

        assert!(checkout.close());
        assert_eq!(checkout.phase(), &CheckoutPhase::Idle);
        assert_eq!(checkout.client().query(), "");
        assert_eq!(checkout.client().selected_id(), None);
        assert!(!checkout.client().is_new_client_open());
        assert!(!checkout.client().dropdown().is_visible());
    }

    #[test]
    fn test_search_ignored_when_dialog_closed() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        assert_eq!(checkout.type_client_query("a".into()), None);

        checkout.open(&cart).unwrap();
        let gen = checkout.schedule_client_search().unwrap();
        checkout.close();
        assert_eq!(checkout.pending_client_query(gen), None);
        assert!(!checkout.apply_client_search(gen, Ok(vec![named_client()])));
    }

    #[test]
    fn test_new_client_requires_name() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| d.telefono = "700".into());

        assert_eq!(
            checkout.begin_create_client(),
            Err(CheckoutError::MissingClientName)
        );
        assert!(!checkout.client().is_saving());
    }

    #[test]
    fn test_new_client_success_adopts_selection() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| d.nombre_completo = " Ana Rojas ".into());

        let pending = checkout.begin_create_client().unwrap();
        assert_eq!(pending.request.nombre_completo, "Ana Rojas");
        assert_eq!(
            checkout.begin_create_client(),
            Err(CheckoutError::RequestInFlight)
        );

        let created = checkout
            .finish_create_client(pending.generation, Ok(CreateClientResponse {
                success: true,
                cliente: Some(CreatedClient {
                    id: "31".into(),
                    nombre_completo: "Ana Rojas".into(),
                }),
                error: None,
            }))
            .unwrap();
        assert_eq!(created.id, "31");
        assert_eq!(checkout.client().selected_id(), Some("31"));
        assert_eq!(checkout.client().query(), "Ana Rojas");
        assert!(!checkout.client().is_new_client_open());
        assert_eq!(checkout.client().draft().nombre_completo, "");
    }

    #[test]
    fn test_new_client_failure_keeps_sub_form() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| {
            d.nombre_completo = "Ana".into();
            d.ci_nit = "123".into();
        });
        let pending = checkout.begin_create_client().unwrap();

        let err = checkout
            .finish_create_client(pending.generation, Ok(CreateClientResponse {
                success: false,
                cliente: None,
                error: Some("Ya existe un cliente con ese CI/NIT.".into()),
            }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: Ya existe un cliente con ese CI/NIT.");
        assert!(checkout.client().is_new_client_open());
        assert!(!checkout.client().is_saving());
        assert_eq!(checkout.client().draft().ci_nit, "123");
        assert_eq!(checkout.client().selected_id(), None);

        let pending = checkout.begin_create_client().unwrap();
        let err = checkout
            .finish_create_client(pending.generation, Err("offline".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Error al crear el cliente. Intente de nuevo.");
    }

    fn created_ana() -> Result<CreateClientResponse, String> {
        Ok(CreateClientResponse {
            success: true,
            cliente: Some(CreatedClient {
                id: "31".into(),
                nombre_completo: "Ana".into(),
            }),
            error: None,
        })
    }

    #[test]
    fn test_late_creation_response_after_reopen_is_dropped() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| d.nombre_completo = "Ana".into());
        let stale = checkout.begin_create_client().unwrap();

        checkout.close();
        checkout.open(&cart).unwrap();
        assert_eq!(
            checkout.finish_create_client(stale.generation, created_ana()),
            Err(CheckoutError::Superseded)
        );
        assert_eq!(checkout.client().selected_id(), None);
        assert_eq!(checkout.client().query(), "");
        assert!(!checkout.client().is_saving());
        assert_eq!(
            checkout.begin_submit(&cart, WALK_IN),
            Err(CheckoutError::MissingSelection)
        );

        // a fresh request from the reopened dialog is applied
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| d.nombre_completo = "Ana".into());
        let pending = checkout.begin_create_client().unwrap();
        assert_ne!(pending.generation, stale.generation);
        checkout
            .finish_create_client(pending.generation, created_ana())
            .unwrap();
        assert_eq!(checkout.client().selected_id(), Some("31"));
    }

    #[test]
    fn test_creation_response_dropped_while_dialog_closed() {
        let cart = cart_with_one_item();
        let mut checkout = Checkout::default();
        assert_eq!(
            checkout.begin_create_client(),
            Err(CheckoutError::ModalClosed)
        );

        checkout.open(&cart).unwrap();
        checkout.show_new_client(true);
        checkout.edit_new_client(|d| d.nombre_completo = "Ana".into());
        let pending = checkout.begin_create_client().unwrap();
        checkout.close();
        assert_eq!(
            checkout.finish_create_client(pending.generation, created_ana()),
            Err(CheckoutError::Superseded)
        );
        assert_eq!(checkout.client().selected_id(), None);
    }
}

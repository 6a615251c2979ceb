//! Reactive context shared by every part of the register screen.
//!
//! Components never talk to the network themselves: they call the handlers
//! here, which update `PosSession` and report the outcome as a notice.

use std::sync::Arc;

use contracts::domain::a102_client::ClientSummary;
use contracts::domain::a103_sale::{ConsumptionMode, DocumentType};
use contracts::domain::a104_catalog::CatalogProduct;
use contracts::shared::PosConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a101_cart::ui::added_message;
use crate::domain::a102_client::api as client_api;
use crate::domain::a102_client::CLIENT_SEARCH_DEBOUNCE_MS;
use crate::domain::a103_sale::api as sale_api;
use crate::domain::a103_sale::CheckoutError;
use crate::domain::a104_catalog::CatalogFilter;
use crate::domain::pos_session::PosSession;
use crate::shared::api_utils::csrf_token;
use crate::shared::notices::NoticeService;
use crate::shared::storage::KeyValueStore;

#[derive(Clone, Copy)]
pub struct PosContext {
    pub config: StoredValue<PosConfig>,
    pub session: RwSignal<PosSession>,
    pub catalog: RwSignal<CatalogFilter>,
    pub notices: NoticeService,
}

impl PosContext {
    pub fn new(config: PosConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let session = PosSession::new(
            storage,
            config.siguiente_ticket,
            config.cliente_mostrador_id.clone(),
        );
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(session),
            catalog: RwSignal::new(CatalogFilter::default()),
            notices: NoticeService::new(),
        }
    }

    fn report(&self, error: CheckoutError) {
        log::debug!("Checkout rejected: {:?}", error);
        self.notices.push(error.notice_kind(), error.to_string());
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn add_to_cart(&self, product: &CatalogProduct) {
        self.session.update(|s| {
            s.add_product(product);
        });
        self.notices.success(added_message(&product.nombre));
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        self.session.update(|s| {
            s.cart_mut().remove(product_id);
        });
    }

    pub fn change_quantity(&self, product_id: &str, delta: i32) {
        self.session.update(|s| {
            s.cart_mut().update_quantity(product_id, delta);
        });
    }

    // ------------------------------------------------------------------
    // Checkout dialog
    // ------------------------------------------------------------------

    pub fn open_checkout(&self) {
        let outcome = self.session.try_update(|s| s.open_checkout());
        if let Some(Err(e)) = outcome {
            self.report(e);
        }
    }

    pub fn cancel_checkout(&self) {
        self.session.update(|s| {
            s.checkout_mut().close();
        });
    }

    pub fn dismiss_completed(&self) {
        self.session.update(|s| s.checkout_mut().dismiss_completed());
    }

    pub fn set_payment_method(&self, id: String) {
        self.session.update(|s| s.checkout_mut().set_payment_method(id));
    }

    pub fn set_consumption_mode(&self, mode: ConsumptionMode) {
        self.session
            .update(|s| s.checkout_mut().set_consumption_mode(mode));
    }

    pub fn set_document_type(&self, document_type: DocumentType) {
        let cleared = self
            .session
            .try_update(|s| s.set_document_type(document_type))
            .unwrap_or(false);
        if cleared {
            log::debug!("Walk-in customer cleared for {}", document_type.as_str());
        }
    }

    // ------------------------------------------------------------------
    // Customer search
    // ------------------------------------------------------------------

    /// Keystroke in the customer field: debounced search.
    pub fn on_client_query(&self, text: String) {
        let generation = self
            .session
            .try_update(|s| s.checkout_mut().type_client_query(text))
            .flatten();
        if let Some(generation) = generation {
            self.search_clients(generation, CLIENT_SEARCH_DEBOUNCE_MS);
        }
    }

    /// Field focused: search right away with whatever is typed.
    pub fn on_client_focus(&self) {
        let generation = self
            .session
            .try_update(|s| s.checkout_mut().schedule_client_search())
            .flatten();
        if let Some(generation) = generation {
            self.search_clients(generation, 0);
        }
    }

    fn search_clients(&self, generation: u64, delay_ms: u32) {
        let session = self.session;
        let url = self.config.with_value(|c| c.buscar_clientes_url.clone());
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            let Some(query) = session
                .try_with_untracked(|s| s.checkout().pending_client_query(generation))
                .flatten()
            else {
                return;
            };
            let outcome = client_api::search_clients(&url, &query).await;
            if let Err(e) = &outcome {
                log::warn!("Client search for {:?} failed: {}", query, e);
            }
            session.try_update(|s| s.checkout_mut().apply_client_search(generation, outcome));
        });
    }

    pub fn select_client(&self, client: &ClientSummary) {
        self.session.update(|s| s.checkout_mut().select_client(client));
    }

    pub fn dismiss_client_dropdown(&self) {
        let visible = self
            .session
            .with_untracked(|s| s.checkout().client().dropdown().is_visible());
        if visible {
            self.session
                .update(|s| s.checkout_mut().dismiss_client_dropdown());
        }
    }

    pub fn select_walk_in(&self) {
        if let Some(Err(e)) = self.session.try_update(|s| s.select_walk_in()) {
            self.report(e);
        }
    }

    // ------------------------------------------------------------------
    // New customer
    // ------------------------------------------------------------------

    pub fn toggle_new_client(&self) {
        self.session.update(|s| {
            let open = s.checkout().client().is_new_client_open();
            s.checkout_mut().show_new_client(!open);
        });
    }

    pub fn create_client(&self) {
        let pending = match self.session.try_update(|s| s.checkout_mut().begin_create_client()) {
            Some(Ok(pending)) => pending,
            Some(Err(e)) => {
                self.report(e);
                return;
            }
            None => return,
        };

        let this = *self;
        let (url, csrf) = self
            .config
            .with_value(|c| (c.crear_cliente_url.clone(), csrf_token(c)));
        spawn_local(async move {
            let outcome = client_api::create_client(&url, &csrf, &pending.request).await;
            if let Err(e) = &outcome {
                log::error!("Client creation failed: {}", e);
            }
            match this
                .session
                .try_update(|s| s.checkout_mut().finish_create_client(pending.generation, outcome))
            {
                Some(Ok(created)) => {
                    log::debug!("Client {} created", created.id);
                    this.notices.success("Cliente creado correctamente");
                }
                Some(Err(CheckoutError::Superseded)) | None => {}
                Some(Err(e)) => this.report(e),
            }
        });
    }

    // ------------------------------------------------------------------
    // Sale
    // ------------------------------------------------------------------

    pub fn submit_sale(&self) {
        let request = match self.session.try_update(|s| s.begin_sale()) {
            Some(Ok(request)) => request,
            Some(Err(CheckoutError::RequestInFlight)) | None => return,
            Some(Err(e)) => {
                self.report(e);
                return;
            }
        };

        let this = *self;
        let (url, csrf) = self.config.with_value(|c| {
            log::debug!(
                "Sale: {} line(s), payment {:?}, walk-in {}, {}",
                request.items.len(),
                c.payment_method(&request.metodo_pago_id).map(|m| m.nombre.as_str()),
                c.is_walk_in(&request.cliente_id),
                request.tipo_documento.as_str()
            );
            (c.procesar_pago_url.clone(), csrf_token(c))
        });
        spawn_local(async move {
            let outcome = sale_api::submit_sale(&url, &csrf, &request).await;
            if let Err(e) = &outcome {
                log::error!("Sale submission failed: {}", e);
            }
            match this.session.try_update(|s| s.finish_sale(outcome)) {
                Some(Ok(_)) => this.notices.success("✓ Venta procesada exitosamente"),
                Some(Err(e)) => this.report(e),
                None => {}
            }
        });
    }
}

pub fn use_pos_context() -> PosContext {
    use_context::<PosContext>().expect("PosContext not found")
}

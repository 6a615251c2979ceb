use contracts::domain::a102_client::{ClientSummary, CreateClientRequest, CreatedClient};

/// Delay between the last keystroke and the search request.
pub const CLIENT_SEARCH_DEBOUNCE_MS: u32 = 300;

/// Display text used when the walk-in customer is picked.
pub const WALK_IN_LABEL: &str = "Mostrador";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ClientDropdown {
    #[default]
    Hidden,
    Results(Vec<ClientSummary>),
    NoResults,
    Failed,
}

impl ClientDropdown {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ClientDropdown::Hidden)
    }
}

/// Customer part of the payment form: search field, selected id, result
/// dropdown, and the "new customer" sub-form.
///
/// Each scheduled search gets a generation number; only the latest one may
/// fire its request or fill the dropdown. Customer creation requests are
/// numbered the same way so a response only lands on the form that sent it.
#[derive(Debug, Clone, Default)]
pub struct ClientPicker {
    query: String,
    selected_id: Option<String>,
    dropdown: ClientDropdown,
    search_generation: u64,
    new_client_open: bool,
    draft: CreateClientRequest,
    saving: bool,
    create_generation: u64,
}

impl ClientPicker {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn dropdown(&self) -> &ClientDropdown {
        &self.dropdown
    }

    pub fn is_new_client_open(&self) -> bool {
        self.new_client_open
    }

    pub fn draft(&self) -> &CreateClientRequest {
        &self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Back to an empty form. Searches and customer creations started before
    /// the reset are invalidated.
    pub fn reset(&mut self) {
        let search_generation = self.search_generation + 1;
        let create_generation = self.create_generation + 1;
        *self = Self {
            search_generation,
            create_generation,
            ..Self::default()
        };
    }

    /// Drop the selected customer and its label, e.g. when it no longer
    /// fits the document type.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
        self.query.clear();
        self.dropdown = ClientDropdown::Hidden;
        self.search_generation += 1;
    }

    /// The cashier typed in the search field: the previous selection no
    /// longer holds and a new search is scheduled.
    pub fn type_query(&mut self, text: String) -> u64 {
        self.query = text;
        self.selected_id = None;
        self.schedule_search()
    }

    /// Supersede any pending search; returns the new generation.
    pub fn schedule_search(&mut self) -> u64 {
        self.search_generation += 1;
        self.search_generation
    }

    /// Query to send for `generation`, or `None` if a newer search replaced it.
    pub fn pending_query(&self, generation: u64) -> Option<String> {
        (generation == self.search_generation).then(|| self.query.trim().to_string())
    }

    /// Fill the dropdown with a search outcome. Stale generations are ignored.
    pub fn apply_search(&mut self, generation: u64, outcome: Result<Vec<ClientSummary>, String>) -> bool {
        if generation != self.search_generation {
            return false;
        }
        self.dropdown = match outcome {
            Ok(clients) if clients.is_empty() => ClientDropdown::NoResults,
            Ok(clients) => ClientDropdown::Results(clients),
            Err(_) => ClientDropdown::Failed,
        };
        true
    }

    pub fn select(&mut self, client: &ClientSummary) {
        self.select_with_label(client.id.clone(), client.display_label());
    }

    pub fn select_with_label(&mut self, id: String, label: String) {
        self.selected_id = Some(id);
        self.query = label;
        self.dropdown = ClientDropdown::Hidden;
        // a late response must not reopen the dropdown over the selection
        self.search_generation += 1;
    }

    pub fn hide_dropdown(&mut self) {
        self.dropdown = ClientDropdown::Hidden;
    }

    pub fn show_new_client(&mut self, open: bool) {
        self.new_client_open = open;
    }

    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut CreateClientRequest)) {
        edit(&mut self.draft);
    }

    pub fn set_saving(&mut self, saving: bool) {
        self.saving = saving;
    }

    /// Mark a creation request as sent; returns its generation.
    pub fn begin_create(&mut self) -> u64 {
        self.saving = true;
        self.create_generation += 1;
        self.create_generation
    }

    /// Whether a creation response for `generation` still belongs to this form.
    pub fn is_current_create(&self, generation: u64) -> bool {
        self.saving && generation == self.create_generation
    }

    /// Adopt a freshly created customer as the selection and clear the sub-form.
    pub fn adopt_created(&mut self, client: &CreatedClient) {
        self.select_with_label(client.id.clone(), client.nombre_completo.clone());
        self.draft = CreateClientRequest::default();
        self.new_client_open = false;
        self.saving = false;
    }
}

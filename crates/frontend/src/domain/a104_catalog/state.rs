use contracts::domain::a104_catalog::CatalogProduct;

/// Category tab value that shows every product.
pub const ALL_CATEGORIES: &str = "all";

/// Which filter was applied last; the two override each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedFilter {
    Category(String),
    /// Lowercased search term.
    Search(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    category: String,
    search_input: String,
    applied: AppliedFilter,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_input: String::new(),
            applied: AppliedFilter::Category(ALL_CATEGORIES.to_string()),
        }
    }
}

impl CatalogFilter {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn applied(&self) -> &AppliedFilter {
        &self.applied
    }

    /// Text typed into the search field; not applied until [`Self::apply_search`].
    pub fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    /// Show only products of `category`. The search field keeps its text.
    pub fn select_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.applied = AppliedFilter::Category(self.category.clone());
    }

    /// Filter by name (case-insensitive substring) and reset the category
    /// tab to "all".
    pub fn apply_search(&mut self) {
        let term = self.search_input.trim().to_lowercase();
        self.category = ALL_CATEGORIES.to_string();
        self.applied = AppliedFilter::Search(term);
    }

    pub fn is_active_tab(&self, category: &str) -> bool {
        self.category == category
    }

    pub fn is_visible(&self, product: &CatalogProduct) -> bool {
        match &self.applied {
            AppliedFilter::Category(category) => {
                category == ALL_CATEGORIES || product.categoria.as_deref() == Some(category)
            }
            AppliedFilter::Search(term) => product.nombre.to_lowercase().contains(term.as_str()),
        }
    }

    pub fn visible_count(&self, products: &[CatalogProduct]) -> usize {
        products.iter().filter(|p| self.is_visible(p)).count()
    }
}

use crate::filter::FilterState;
use crate::models::{CategorySummary, Product};

/// Coarse load lifecycle of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Ready,
    /// The last load failed; the previous product list is still shown.
    Error,
}

/// Issued when a product load starts; completions carrying an older ticket
/// than the latest issued one are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything the dashboard owns between events.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub filters: FilterState,
    pub(crate) products: Vec<Product>,
    pub(crate) visible: Vec<Product>,
    pub(crate) categories: Vec<CategorySummary>,
    pub(crate) search_query: String,
    pub(crate) load_state: LoadState,
    pub(crate) open_detail: Option<String>,
    latest_generation: u64,
}

impl DashboardState {
    pub fn new(filters: FilterState) -> Self {
        Self {
            filters,
            products: Vec::new(),
            visible: Vec::new(),
            categories: Vec::new(),
            search_query: String::new(),
            load_state: LoadState::Uninitialized,
            open_detail: None,
            latest_generation: 0,
        }
    }

    /// Products from the last successful load.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products currently rendered (the loaded list narrowed by search).
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Id of the product whose detail view is open.
    pub fn open_detail(&self) -> Option<&str> {
        self.open_detail.as_deref()
    }

    pub(crate) fn issue_ticket(&mut self) -> LoadTicket {
        self.latest_generation += 1;
        LoadTicket {
            generation: self.latest_generation,
        }
    }

    /// Make every ticket issued so far stale.
    pub(crate) fn invalidate_loads(&mut self) {
        self.latest_generation += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.generation == self.latest_generation
    }
}

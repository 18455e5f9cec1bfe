//! Dashboard controller.
//!
//! [`Dashboard`] owns the filter state, the loaded product list and the load
//! lifecycle, and drives the load → filter → render cycle:
//!
//! - filter changes always go back to the backend;
//! - free-text search is debounced and narrows the already-loaded list in
//!   memory;
//! - every render recomputes the product list, stat cards and chart series
//!   from the visible products.
//!
//! Failures never escape: each call site logs and shows a notification, and
//! the last successfully loaded list stays on screen.

pub mod debounce;
pub mod state;
pub mod surface;
pub mod view;

pub use debounce::Debouncer;
pub use state::{DashboardState, LoadState, LoadTicket};
pub use surface::{DisplaySurface, Notification, NotificationLevel};

use std::time::Instant;

use crate::api::DashboardApi;
use crate::charts::{ChartBackend, ChartManager, ChartOptions};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::FilterState;
use crate::models::{AlertRequest, Product, TrendStatus};

pub const TREND_CHART: &str = "trendChart";
pub const PLATFORM_CHART: &str = "platformChart";
pub const CATEGORY_CHART: &str = "categoryChart";
pub const DETAIL_CHART: &str = "velocityChart";

/// Number of products plotted on the trend line.
const TREND_CHART_POINTS: usize = 10;

pub struct Dashboard<A, C, D>
where
    A: DashboardApi,
    C: ChartBackend,
    D: DisplaySurface,
{
    api: A,
    charts: ChartManager<C>,
    surface: D,
    state: DashboardState,
    search: Debouncer<String>,
    default_min_score: f64,
}

impl<A, C, D> Dashboard<A, C, D>
where
    A: DashboardApi,
    C: ChartBackend,
    D: DisplaySurface,
{
    pub fn new(api: A, chart_backend: C, surface: D, config: &DashboardConfig) -> Self {
        let mut filters = FilterState::new().with_min_score(config.default_min_score);
        filters.limit = Some(config.default_limit);
        Self {
            api,
            charts: ChartManager::new(chart_backend),
            surface,
            state: DashboardState::new(filters),
            search: Debouncer::new(config.search_debounce()),
            default_min_score: config.default_min_score,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn charts(&self) -> &ChartManager<C> {
        &self.charts
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // -- Loading ---------------------------------------------------------------

    /// First load: products and categories, each reported independently.
    pub fn initialize(&mut self) {
        tracing::info!("Initializing dashboard");
        self.load_products();
        self.load_categories();
    }

    /// Fetch products for the current filters and render them.
    pub fn load_products(&mut self) -> bool {
        let ticket = self.begin_product_load();
        let result = self.api.list_products(&self.state.filters);
        self.finish_product_load(ticket, result)
    }

    /// Enter `Loading` and issue a ticket for the load about to start.
    pub fn begin_product_load(&mut self) -> LoadTicket {
        let ticket = self.state.issue_ticket();
        self.state.load_state = LoadState::Loading;
        self.surface.set_loading(true);
        ticket
    }

    /// Apply a finished product load.
    ///
    /// Returns `false` when the result was discarded because a newer load
    /// has been started since `ticket` was issued.
    pub fn finish_product_load(&mut self, ticket: LoadTicket, result: Result<Vec<Product>>) -> bool {
        if !self.state.is_current(ticket) {
            tracing::debug!(
                "Discarding stale product load (generation {})",
                ticket.generation()
            );
            return false;
        }
        self.surface.set_loading(false);
        match result {
            Ok(products) => {
                self.state.products = products;
                self.state.load_state = LoadState::Ready;
                self.state.visible = view::search(&self.state.products, &self.state.search_query);
                self.render();
            }
            Err(e) => {
                tracing::error!("Error loading products: {}", e);
                self.state.load_state = LoadState::Error;
                self.surface.notify(Notification::error(format!(
                    "Failed to load products: {}",
                    e.user_message()
                )));
            }
        }
        true
    }

    pub fn load_categories(&mut self) {
        match self.api.categories() {
            Ok(categories) => {
                self.state.categories = categories;
                self.surface
                    .render_categories(&view::category_rows(&self.state.categories));
            }
            Err(e) => {
                tracing::error!("Error loading categories: {}", e);
                self.surface.notify(Notification::error(format!(
                    "Failed to load categories: {}",
                    e.user_message()
                )));
            }
        }
    }

    // -- Filters ---------------------------------------------------------------

    pub fn toggle_category(&mut self, category: &str) {
        self.state.filters.toggle_category(category);
        self.load_products();
    }

    pub fn toggle_platform(&mut self, platform: &str) {
        self.state.filters.toggle_platform(platform);
        self.load_products();
    }

    pub fn set_min_score(&mut self, min_score: f64) {
        self.state.filters.min_score = min_score;
        self.load_products();
    }

    pub fn set_status(&mut self, status: Option<TrendStatus>) {
        self.state.filters.status = status;
        self.load_products();
    }

    /// Reset filters to the configured defaults and refetch.
    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.filters.min_score = self.default_min_score;
        self.load_products();
    }

    // -- Search ----------------------------------------------------------------

    /// Record a keystroke; the search runs once input has been quiet for the
    /// debounce window.
    pub fn on_search_input(&mut self, text: &str, now: Instant) {
        self.search.schedule(text.to_string(), now);
    }

    /// Fire any due timers. Returns `true` if a search ran.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(query) => {
                self.apply_search(&query);
                true
            }
            None => false,
        }
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Narrow the loaded list to `query` without a backend round-trip.
    pub fn apply_search(&mut self, query: &str) {
        self.state.search_query = query.to_string();
        self.state.visible = view::search(&self.state.products, query);
        tracing::debug!(
            "Search '{}' matched {} of {} products",
            query,
            self.state.visible.len(),
            self.state.products.len()
        );
        self.render();
    }

    // -- Rendering -------------------------------------------------------------

    /// Commit the visible products: list, stats and charts.
    pub fn render(&mut self) {
        let products = &self.state.visible;
        self.surface.render_products(&view::product_list(products));
        self.surface.render_stats(&view::stat_cards(products));

        let (labels, scores) = view::trend_series(products, TREND_CHART_POINTS);
        self.charts.create_trend_chart(
            TREND_CHART,
            &labels,
            &scores,
            Some(titled("Trend Scores", "Trend score")),
        );
        self.charts.create_platform_chart(
            PLATFORM_CHART,
            &view::platform_distribution(products),
            Some(titled("Platform Distribution", "Products")),
        );
        self.charts.create_category_chart(
            CATEGORY_CHART,
            &view::category_distribution(products),
            Some(titled("Categories", "Products")),
        );
    }

    // -- Detail view -----------------------------------------------------------

    /// Open a product's detail view.
    ///
    /// Both the product and its prediction are requested; the view is shown
    /// only if both succeed.
    pub fn open_product_detail(&mut self, product_id: &str) -> bool {
        self.surface.set_loading(true);
        let product = self.api.product(product_id);
        let prediction = self.api.prediction(product_id);
        if self.state.load_state != LoadState::Loading {
            self.surface.set_loading(false);
        }

        match (product, prediction) {
            (Ok(product), Ok(prediction)) => {
                self.surface
                    .show_detail(&view::detail_view(&product, &prediction));
                self.charts.create_velocity_chart(
                    DETAIL_CHART,
                    &view::detail_radar(&product, &prediction),
                    Some(titled(&product.name, "Momentum")),
                );
                self.state.open_detail = Some(product.id);
                true
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("Error loading product details for {}: {}", product_id, e);
                self.surface.notify(Notification::error(format!(
                    "Failed to load product details: {}",
                    e.user_message()
                )));
                false
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.charts.destroy_chart(DETAIL_CHART);
        self.surface.close_detail();
        self.state.open_detail = None;
    }

    // -- One-shot actions ------------------------------------------------------

    pub fn compare_prices(&mut self, product_name: &str) -> bool {
        match self.api.compare_prices(product_name, None) {
            Ok(comparison) => {
                let view = view::comparison_view(&comparison);
                self.surface.show_comparison(&view);
                self.surface.notify(Notification::success(format!(
                    "Found {} price(s) for {}",
                    view.rows.len(),
                    product_name
                )));
                true
            }
            Err(e) => {
                tracing::error!("Error comparing prices for {}: {}", product_name, e);
                self.surface.notify(Notification::error(format!(
                    "Failed to compare prices: {}",
                    e.user_message()
                )));
                false
            }
        }
    }

    /// Create an alert; on success the open detail view is closed.
    pub fn create_alert(&mut self, request: &AlertRequest) -> bool {
        match self.api.create_alert(request) {
            Ok(alert) => {
                tracing::info!("Alert {} created", alert.id);
                self.surface
                    .notify(Notification::success("Alert created successfully"));
                if self.state.open_detail.is_some() {
                    self.close_detail();
                }
                true
            }
            Err(e) => {
                tracing::error!("Error creating alert: {}", e);
                self.surface.notify(Notification::error(format!(
                    "Failed to create alert: {}",
                    e.user_message()
                )));
                false
            }
        }
    }

    /// Release every chart and return to `Uninitialized`.
    ///
    /// Loads still in flight are invalidated. Filters and the loaded list are
    /// kept so [`initialize`](Self::initialize) can be called again.
    pub fn teardown(&mut self) {
        if self.state.open_detail.is_some() {
            self.close_detail();
        }
        self.charts.destroy_all();
        self.search.cancel();
        self.state.invalidate_loads();
        if self.state.load_state == LoadState::Loading {
            self.surface.set_loading(false);
        }
        self.state.load_state = LoadState::Uninitialized;
    }
}

fn titled(title: &str, dataset_label: &str) -> ChartOptions {
    ChartOptions {
        title: Some(title.to_string()),
        dataset_label: Some(dataset_label.to_string()),
        ..ChartOptions::default()
    }
}

//! Shared test fixtures for the Trend Radar integration tests.
//!
//! - `MockBackend`: a `tiny_http` server on an ephemeral port that answers
//!   scripted JSON responses under `/api/v1` and records every request.
//! - `FakeApi`: in-memory `DashboardApi` with queued results.
//! - `FakeCharts`: chart backend that tracks live instances.
//! - `RecordingSurface`: display surface that records what was committed.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::{Header, Method, Response, Server, StatusCode};
use trend_radar::charts::{ChartBackend, ChartSpec};
use trend_radar::dashboard::view::{CategoryRow, ComparisonView, DetailView, ProductListView, StatCards};
use trend_radar::dashboard::{DisplaySurface, Notification, NotificationLevel};
use trend_radar::models::{
    Alert, AlertRequest, CategorySummary, Momentum, Product, ProductComparison, TrendPrediction,
    TrendStatus,
};
use trend_radar::{DashboardApi, FilterState, RequestError, TrendRadarError};

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

pub fn product(id: &str, name: &str, category: &str, status: TrendStatus, platforms: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{} description", name),
        price: 49.99,
        trend_score: 0.8,
        viral_velocity: 0.6,
        status,
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        image_url: None,
    }
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            trend_score: 0.9,
            ..product("p-1", "Wireless Earbuds", "electronics", TrendStatus::Emerging, &["tiktok", "amazon"])
        },
        Product {
            trend_score: 0.7,
            ..product("p-2", "Gaming Mouse", "electronics", TrendStatus::Rising, &["youtube", "amazon"])
        },
        Product {
            trend_score: 0.5,
            ..product("p-3", "Yoga Mat", "fitness", TrendStatus::Peak, &["instagram"])
        },
    ]
}

pub fn sample_products_json() -> String {
    serde_json::to_string(&sample_products()).unwrap()
}

pub fn sample_categories() -> Vec<CategorySummary> {
    vec![
        CategorySummary {
            category: "electronics".to_string(),
            product_count: 2,
            avg_trend_score: 0.8,
            momentum: Momentum::Rising,
        },
        CategorySummary {
            category: "fitness".to_string(),
            product_count: 1,
            avg_trend_score: 0.5,
            momentum: Momentum::Stable,
        },
    ]
}

pub fn sample_prediction(product_id: &str) -> TrendPrediction {
    TrendPrediction {
        product_id: product_id.to_string(),
        predicted_peak_date: Some("2026-11-20".to_string()),
        confidence_score: 0.82,
        duration_days: Some(21),
        max_predicted_score: 0.93,
        recommendation: "Stock up before the holidays".to_string(),
        factors: serde_json::json!({}),
    }
}

pub fn sample_alert(request: &AlertRequest) -> Alert {
    Alert {
        id: "alert-1".to_string(),
        user_id: request.user_id.clone(),
        keywords: request.keywords.clone(),
        categories: request.categories.clone(),
        min_trend_score: request.min_trend_score,
        platforms: request.platforms.clone(),
        active: true,
        created_at: None,
    }
}

// ---------------------------------------------------------------------------
// MockBackend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

struct Route {
    method: String,
    path: String,
    responses: VecDeque<(u16, String)>,
}

/// Scripted HTTP backend. The serving thread exits once the backend is dropped.
pub struct MockBackend {
    pub base_url: String,
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn start() -> Self {
        let server = Server::http("127.0.0.1:0").expect("http server");
        let base_url = format!("http://{}/api/v1", server.server_addr());
        let routes: Arc<Mutex<Vec<Route>>> = Arc::new(Mutex::new(Vec::new()));
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let thread_routes = Arc::clone(&routes);
        let thread_requests = Arc::clone(&requests);
        thread::spawn(move || loop {
            let mut req = match server.recv_timeout(Duration::from_millis(100)) {
                Ok(Some(req)) => req,
                Ok(None) => {
                    if Arc::strong_count(&thread_routes) == 1 {
                        break;
                    }
                    continue;
                }
                Err(_) => break,
            };

            let method = method_name(req.method());
            let url = req.url().to_string();
            let path = url.split('?').next().unwrap_or("").to_string();
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            thread_requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                url: url.clone(),
                body,
            });

            let (status, payload) = {
                let mut routes = thread_routes.lock().unwrap();
                match routes
                    .iter_mut()
                    .find(|r| r.method == method && r.path == path)
                {
                    Some(route) if route.responses.len() > 1 => route.responses.pop_front().unwrap(),
                    Some(route) => route.responses.front().cloned().unwrap(),
                    None => (404, r#"{"detail":"Not Found"}"#.to_string()),
                }
            };

            let response = Response::from_string(payload)
                .with_status_code(StatusCode(status))
                .with_header(
                    Header::from_bytes("Content-Type", "application/json").expect("content type"),
                );
            let _ = req.respond(response);
        });

        Self {
            base_url,
            routes,
            requests,
        }
    }

    /// Script a response for `method path` (path relative to `/api/v1`).
    ///
    /// Responses registered for the same route are served in order; the
    /// last one repeats.
    pub fn on(&self, method: &str, path: &str, status: u16, body: impl Into<String>) -> &Self {
        let full_path = format!("/api/v1{}", path);
        let mut routes = self.routes.lock().unwrap();
        match routes
            .iter_mut()
            .find(|r| r.method == method && r.path == full_path)
        {
            Some(route) => route.responses.push_back((status, body.into())),
            None => routes.push(Route {
                method: method.to_string(),
                path: full_path,
                responses: VecDeque::from([(status, body.into())]),
            }),
        }
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

fn method_name(method: &Method) -> String {
    match method {
        Method::Get => "GET".to_string(),
        Method::Post => "POST".to_string(),
        Method::Put => "PUT".to_string(),
        Method::Delete => "DELETE".to_string(),
        Method::Patch => "PATCH".to_string(),
        other => format!("{:?}", other).to_uppercase(),
    }
}

// ---------------------------------------------------------------------------
// FakeApi
// ---------------------------------------------------------------------------

type Scripted<T> = std::result::Result<T, String>;

fn backend_error(message: &str) -> TrendRadarError {
    TrendRadarError::Request(RequestError::backend(500, message))
}

/// In-memory API. Errors are scripted as plain messages and surface as
/// HTTP 500 request errors.
#[derive(Default)]
pub struct FakeApi {
    pub product_lists: RefCell<VecDeque<Scripted<Vec<Product>>>>,
    pub category_lists: RefCell<VecDeque<Scripted<Vec<CategorySummary>>>>,
    pub details: RefCell<HashMap<String, Scripted<Product>>>,
    pub predictions: RefCell<HashMap<String, Scripted<TrendPrediction>>>,
    pub comparison: RefCell<Option<Scripted<ProductComparison>>>,
    pub alert_failure: RefCell<Option<String>>,
    pub product_queries: RefCell<Vec<FilterState>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn queue_products(&self, result: Scripted<Vec<Product>>) -> &Self {
        self.product_lists.borrow_mut().push_back(result);
        self
    }

    pub fn queue_categories(&self, result: Scripted<Vec<CategorySummary>>) -> &Self {
        self.category_lists.borrow_mut().push_back(result);
        self
    }

    pub fn set_detail(&self, id: &str, product: Scripted<Product>, prediction: Scripted<TrendPrediction>) {
        self.details.borrow_mut().insert(id.to_string(), product);
        self.predictions.borrow_mut().insert(id.to_string(), prediction);
    }

    pub fn product_query_count(&self) -> usize {
        self.product_queries.borrow().len()
    }
}

impl DashboardApi for FakeApi {
    fn list_products(&self, filters: &FilterState) -> trend_radar::Result<Vec<Product>> {
        self.product_queries.borrow_mut().push(filters.clone());
        self.calls.borrow_mut().push("list_products".to_string());
        match self.product_lists.borrow_mut().pop_front() {
            Some(Ok(products)) => Ok(products),
            Some(Err(msg)) => Err(backend_error(&msg)),
            None => Ok(Vec::new()),
        }
    }

    fn product(&self, product_id: &str) -> trend_radar::Result<Product> {
        self.calls.borrow_mut().push(format!("product:{}", product_id));
        match self.details.borrow().get(product_id) {
            Some(Ok(p)) => Ok(p.clone()),
            Some(Err(msg)) => Err(backend_error(msg)),
            None => Err(backend_error("Product not found")),
        }
    }

    fn prediction(&self, product_id: &str) -> trend_radar::Result<TrendPrediction> {
        self.calls.borrow_mut().push(format!("prediction:{}", product_id));
        match self.predictions.borrow().get(product_id) {
            Some(Ok(p)) => Ok(p.clone()),
            Some(Err(msg)) => Err(backend_error(msg)),
            None => Err(backend_error("Prediction not found")),
        }
    }

    fn categories(&self) -> trend_radar::Result<Vec<CategorySummary>> {
        self.calls.borrow_mut().push("categories".to_string());
        match self.category_lists.borrow_mut().pop_front() {
            Some(Ok(categories)) => Ok(categories),
            Some(Err(msg)) => Err(backend_error(&msg)),
            None => Ok(Vec::new()),
        }
    }

    fn compare_prices(
        &self,
        product_name: &str,
        _platforms: Option<&[String]>,
    ) -> trend_radar::Result<ProductComparison> {
        self.calls.borrow_mut().push(format!("compare:{}", product_name));
        match self.comparison.borrow().clone() {
            Some(Ok(c)) => Ok(c),
            Some(Err(msg)) => Err(backend_error(&msg)),
            None => Err(backend_error("No comparison scripted")),
        }
    }

    fn create_alert(&self, request: &AlertRequest) -> trend_radar::Result<Alert> {
        self.calls.borrow_mut().push("create_alert".to_string());
        match self.alert_failure.borrow().as_deref() {
            Some(msg) => Err(backend_error(msg)),
            None => Ok(sample_alert(request)),
        }
    }
}

// ---------------------------------------------------------------------------
// FakeCharts
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FakeCharts {
    pub containers: HashSet<String>,
    pub live: HashSet<u64>,
    pub draws: Vec<(String, ChartSpec)>,
    pub destroyed: Vec<u64>,
    next_id: u64,
}

impl FakeCharts {
    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            containers: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn last_draw_for(&self, container_id: &str) -> Option<&ChartSpec> {
        self.draws
            .iter()
            .rev()
            .find(|(id, _)| id == container_id)
            .map(|(_, spec)| spec)
    }
}

impl ChartBackend for FakeCharts {
    type Instance = u64;

    fn container_exists(&self, container_id: &str) -> bool {
        self.containers.contains(container_id)
    }

    fn draw(&mut self, container_id: &str, spec: &ChartSpec) -> u64 {
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.draws.push((container_id.to_string(), spec.clone()));
        self.next_id
    }

    fn destroy(&mut self, instance: u64) {
        assert!(self.live.remove(&instance), "chart {} destroyed twice", instance);
        self.destroyed.push(instance);
    }
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub loading: Vec<bool>,
    pub product_views: Vec<ProductListView>,
    pub stats: Vec<StatCards>,
    pub categories: Vec<Vec<CategoryRow>>,
    pub detail: Option<DetailView>,
    pub detail_closes: usize,
    pub comparisons: Vec<ComparisonView>,
    pub notifications: Vec<Notification>,
}

impl RecordingSurface {
    pub fn loading_visible(&self) -> bool {
        self.loading.last().copied().unwrap_or(false)
    }

    pub fn last_products(&self) -> Option<&ProductListView> {
        self.product_views.last()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message.as_str())
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|n| n.level == NotificationLevel::Success)
            .map(|n| n.message.as_str())
            .collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_loading(&mut self, visible: bool) {
        self.loading.push(visible);
    }

    fn render_products(&mut self, view: &ProductListView) {
        self.product_views.push(view.clone());
    }

    fn render_stats(&mut self, stats: &StatCards) {
        self.stats.push(*stats);
    }

    fn render_categories(&mut self, rows: &[CategoryRow]) {
        self.categories.push(rows.to_vec());
    }

    fn show_detail(&mut self, view: &DetailView) {
        self.detail = Some(view.clone());
    }

    fn close_detail(&mut self) {
        self.detail = None;
        self.detail_closes += 1;
    }

    fn show_comparison(&mut self, view: &ComparisonView) {
        self.comparisons.push(view.clone());
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

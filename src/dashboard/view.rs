//! Pure render step: dashboard data in, view models out.
//!
//! Nothing here touches a display. [`DisplaySurface`](super::DisplaySurface)
//! implementations commit these view models.

use std::collections::HashMap;

use crate::models::{
    CategorySummary, PriceComparisonEntry, Product, ProductComparison, TrendPrediction, TrendStatus,
};

pub const EMPTY_PRODUCTS_MESSAGE: &str = "No products found matching your filters";

// ---------------------------------------------------------------------------
// Product list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price_label: String,
    /// Trend score as a whole percentage.
    pub score_percent: u8,
    pub velocity_percent: u8,
    pub status: TrendStatus,
    pub platforms: Vec<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    Empty { message: String },
    Cards(Vec<ProductCard>),
}

impl ProductListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProductListView::Empty { .. })
    }

    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductListView::Cards(cards) => cards,
            ProductListView::Empty { .. } => &[],
        }
    }
}

pub fn product_card(product: &Product) -> ProductCard {
    ProductCard {
        id: product.id.clone(),
        name: product.name.clone(),
        category: product.category.clone(),
        price_label: format_price(product.price),
        score_percent: percent(product.trend_score),
        velocity_percent: percent(product.viral_velocity),
        status: product.status.clone(),
        platforms: product.platforms.clone(),
        image_url: product.image_url.clone(),
    }
}

pub fn product_list(products: &[Product]) -> ProductListView {
    if products.is_empty() {
        return ProductListView::Empty {
            message: EMPTY_PRODUCTS_MESSAGE.to_string(),
        };
    }
    ProductListView::Cards(products.iter().map(product_card).collect())
}

// ---------------------------------------------------------------------------
// Stats and chart series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCards {
    pub total: usize,
    pub emerging: usize,
    pub rising: usize,
    pub avg_score: f64,
}

pub fn stat_cards(products: &[Product]) -> StatCards {
    let total = products.len();
    let emerging = products
        .iter()
        .filter(|p| p.status == TrendStatus::Emerging)
        .count();
    let rising = products
        .iter()
        .filter(|p| p.status == TrendStatus::Rising)
        .count();
    let avg_score = if total == 0 {
        0.0
    } else {
        products.iter().map(|p| p.trend_score).sum::<f64>() / total as f64
    };
    StatCards {
        total,
        emerging,
        rising,
        avg_score,
    }
}

/// Products per platform tag, in first-seen order.
pub fn platform_distribution(products: &[Product]) -> Vec<(String, f64)> {
    count_in_order(products.iter().flat_map(|p| p.platforms.iter()))
}

/// Products per category, in first-seen order.
pub fn category_distribution(products: &[Product]) -> Vec<(String, f64)> {
    count_in_order(products.iter().map(|p| &p.category))
}

/// Names and trend scores of the first `limit` products, in list order.
pub fn trend_series(products: &[Product], limit: usize) -> (Vec<String>, Vec<f64>) {
    products
        .iter()
        .take(limit)
        .map(|p| (p.name.clone(), p.trend_score))
        .unzip()
}

fn count_in_order<'a, I>(keys: I) -> Vec<(String, f64)>
where
    I: Iterator<Item = &'a String>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, f64)> = Vec::new();
    for key in keys {
        match index.get(key.as_str()) {
            Some(&i) => counts[i].1 += 1.0,
            None => {
                index.insert(key.as_str(), counts.len());
                counts.push((key.clone(), 1.0));
            }
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Case-insensitive substring match on name or category.
///
/// An empty or whitespace-only query matches everything.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub product_count: u64,
    pub score_percent: u8,
    pub rising: bool,
}

pub fn category_rows(categories: &[CategorySummary]) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|c| CategoryRow {
            category: c.category.clone(),
            product_count: c.product_count,
            score_percent: percent(c.avg_trend_score),
            rising: c.momentum.is_rising(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub card: ProductCard,
    pub description: String,
    pub confidence_percent: u8,
    pub recommendation: String,
    pub predicted_peak_date: Option<String>,
}

pub fn detail_view(product: &Product, prediction: &TrendPrediction) -> DetailView {
    DetailView {
        card: product_card(product),
        description: product.description.clone(),
        confidence_percent: percent(prediction.confidence_score),
        recommendation: prediction.recommendation.clone(),
        predicted_peak_date: prediction.predicted_peak_date.clone(),
    }
}

/// Radar axes for the detail chart; every value is clamped to [0, 1].
pub fn detail_radar(product: &Product, prediction: &TrendPrediction) -> Vec<(String, f64)> {
    vec![
        ("Trend score".to_string(), unit(product.trend_score)),
        ("Viral velocity".to_string(), unit(product.viral_velocity)),
        ("Confidence".to_string(), unit(prediction.confidence_score)),
        ("Predicted peak".to_string(), unit(prediction.max_predicted_score)),
    ]
}

// ---------------------------------------------------------------------------
// Price comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub platform: String,
    pub price_label: String,
    pub availability: String,
    pub review_count: u64,
    pub rating: Option<f64>,
    pub best_deal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub product_name: String,
    pub rows: Vec<ComparisonRow>,
}

pub fn comparison_view(comparison: &ProductComparison) -> ComparisonView {
    let best = comparison.best_deal.as_ref().map(|d| d.platform.as_str());
    ComparisonView {
        product_name: comparison.product_name.clone(),
        rows: comparison
            .comparisons
            .iter()
            .map(|entry| comparison_row(entry, best == Some(entry.platform.as_str())))
            .collect(),
    }
}

fn comparison_row(entry: &PriceComparisonEntry, best_deal: bool) -> ComparisonRow {
    ComparisonRow {
        platform: entry.platform.clone(),
        price_label: format_price(entry.price),
        availability: entry.availability.clone(),
        review_count: entry.review_count,
        rating: entry.rating,
        best_deal,
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn percent(value: f64) -> u8 {
    (unit(value) * 100.0).round() as u8
}

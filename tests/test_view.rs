//! Render-step tests: stats, distributions, search and view models.

mod common;

use common::{product, sample_categories, sample_prediction, sample_products};
use trend_radar::dashboard::view::{self, ProductListView, EMPTY_PRODUCTS_MESSAGE};
use trend_radar::models::{PriceComparisonEntry, ProductComparison, TrendStatus};

fn entry(platform: &str, price: f64) -> PriceComparisonEntry {
    PriceComparisonEntry {
        platform: platform.to_string(),
        price,
        availability: "in_stock".to_string(),
        shipping: 0.0,
        review_count: 10,
        rating: Some(4.2),
        url: None,
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[test]
fn stats_for_empty_list_are_zero() {
    let stats = view::stat_cards(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.emerging, 0);
    assert_eq!(stats.rising, 0);
    assert_eq!(stats.avg_score, 0.0);
}

#[test]
fn stats_count_emerging_and_rising() {
    let stats = view::stat_cards(&sample_products());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.emerging, 1);
    assert_eq!(stats.rising, 1);
    assert!((stats.avg_score - 0.7).abs() < 1e-9);
}

#[test]
fn unknown_status_counts_as_neither() {
    let products = vec![
        product("p-1", "A", "x", TrendStatus::Other("viral".to_string()), &[]),
        product("p-2", "B", "x", TrendStatus::Emerging, &[]),
    ];
    let stats = view::stat_cards(&products);
    assert_eq!(stats.emerging, 1);
    assert_eq!(stats.rising, 0);
}

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

#[test]
fn platform_distribution_is_first_seen_order() {
    let dist = view::platform_distribution(&sample_products());
    assert_eq!(
        dist,
        vec![
            ("tiktok".to_string(), 1.0),
            ("amazon".to_string(), 2.0),
            ("youtube".to_string(), 1.0),
            ("instagram".to_string(), 1.0),
        ]
    );
}

#[test]
fn category_distribution_counts_products() {
    let dist = view::category_distribution(&sample_products());
    assert_eq!(
        dist,
        vec![("electronics".to_string(), 2.0), ("fitness".to_string(), 1.0)]
    );
}

#[test]
fn distributions_of_empty_list_are_empty() {
    assert!(view::platform_distribution(&[]).is_empty());
    assert!(view::category_distribution(&[]).is_empty());
}

#[test]
fn trend_series_takes_leading_products() {
    let (names, scores) = view::trend_series(&sample_products(), 2);
    assert_eq!(names, vec!["Wireless Earbuds".to_string(), "Gaming Mouse".to_string()]);
    assert_eq!(scores, vec![0.9, 0.7]);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_matches_name_case_insensitively() {
    let hits = view::search(&sample_products(), "EARB");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "p-1");
}

#[test]
fn search_matches_category() {
    let hits = view::search(&sample_products(), "fitness");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "p-3");
}

#[test]
fn blank_search_returns_everything_in_order() {
    let products = sample_products();
    assert_eq!(view::search(&products, ""), products);
    assert_eq!(view::search(&products, "   "), products);
}

#[test]
fn search_without_match_is_empty() {
    assert!(view::search(&sample_products(), "zzz").is_empty());
}

// ---------------------------------------------------------------------------
// Product list and detail
// ---------------------------------------------------------------------------

#[test]
fn empty_list_renders_placeholder() {
    match view::product_list(&[]) {
        ProductListView::Empty { message } => assert_eq!(message, EMPTY_PRODUCTS_MESSAGE),
        other => panic!("expected empty view, got {other:?}"),
    }
}

#[test]
fn cards_format_price_and_percentages() {
    let list = view::product_list(&sample_products());
    assert!(!list.is_empty());
    let card = &list.cards()[0];
    assert_eq!(card.price_label, "$49.99");
    assert_eq!(card.score_percent, 90);
    assert_eq!(card.velocity_percent, 60);
    assert_eq!(card.platforms, vec!["tiktok".to_string(), "amazon".to_string()]);
}

#[test]
fn out_of_range_scores_are_clamped() {
    let mut p = product("p-9", "Odd", "x", TrendStatus::Stable, &[]);
    p.trend_score = 1.7;
    p.viral_velocity = -0.2;
    let card = view::product_card(&p);
    assert_eq!(card.score_percent, 100);
    assert_eq!(card.velocity_percent, 0);
}

#[test]
fn category_rows_flag_rising() {
    let rows = view::category_rows(&sample_categories());
    assert_eq!(rows.len(), 2);
    assert!(rows[0].rising);
    assert_eq!(rows[0].score_percent, 80);
    assert!(!rows[1].rising);
}

#[test]
fn detail_view_and_radar() {
    let products = sample_products();
    let prediction = sample_prediction("p-1");
    let detail = view::detail_view(&products[0], &prediction);
    assert_eq!(detail.card.id, "p-1");
    assert_eq!(detail.confidence_percent, 82);
    assert_eq!(detail.predicted_peak_date.as_deref(), Some("2026-11-20"));

    let radar = view::detail_radar(&products[0], &prediction);
    let values: Vec<f64> = radar.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![0.9, 0.6, 0.82, 0.93]);
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[test]
fn comparison_marks_best_deal() {
    let comparison = ProductComparison {
        product_name: "Gaming Mouse".to_string(),
        comparisons: vec![entry("amazon", 29.99), entry("ebay", 24.5)],
        best_deal: Some(entry("ebay", 24.5)),
        timestamp: None,
    };
    let view = view::comparison_view(&comparison);
    assert_eq!(view.product_name, "Gaming Mouse");
    assert!(!view.rows[0].best_deal);
    assert!(view.rows[1].best_deal);
    assert_eq!(view.rows[1].price_label, "$24.50");
}

#[test]
fn comparison_without_best_deal_marks_nothing() {
    let comparison = ProductComparison {
        product_name: "Gaming Mouse".to_string(),
        comparisons: vec![entry("amazon", 29.99)],
        best_deal: None,
        timestamp: None,
    };
    assert!(view::comparison_view(&comparison)
        .rows
        .iter()
        .all(|row| !row.best_deal));
}

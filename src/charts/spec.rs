use std::fmt;

/// Colors assigned to series points in order, cycling when exhausted.
pub const PALETTE: [&str; 8] = [
    "#6366f1", "#22c55e", "#f59e0b", "#ef4444", "#06b6d4", "#a855f7", "#ec4899", "#84cc16",
];

// ---------------------------------------------------------------------------
// ChartKind / ValueAxis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    TrendLine,
    PlatformBar,
    CategoryDoughnut,
    VelocityRadar,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::TrendLine => "line",
            ChartKind::PlatformBar => "bar",
            ChartKind::CategoryDoughnut => "doughnut",
            ChartKind::VelocityRadar => "radar",
        };
        f.write_str(name)
    }
}

/// How the value axis is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueAxis {
    /// Proportional chart with no axis.
    None,
    /// Auto-scaled with zero as the lower bound.
    FromZero,
    /// Fixed range; radial for radar charts.
    Clamped { min: f64, max: f64 },
}

impl ValueAxis {
    pub const UNIT: ValueAxis = ValueAxis::Clamped { min: 0.0, max: 1.0 };
}

// ---------------------------------------------------------------------------
// ChartOptions / ChartSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: Option<String>,
    pub dataset_label: Option<String>,
    pub animate: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            dataset_label: None,
            animate: true,
        }
    }
}

/// Everything a charting backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub axis: ValueAxis,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub(crate) fn new(kind: ChartKind, labels: Vec<String>, values: Vec<f64>, options: ChartOptions) -> Self {
        let axis = match kind {
            ChartKind::TrendLine | ChartKind::VelocityRadar => ValueAxis::UNIT,
            ChartKind::PlatformBar => ValueAxis::FromZero,
            ChartKind::CategoryDoughnut => ValueAxis::None,
        };
        let colors = (0..labels.len())
            .map(|i| PALETTE[i % PALETTE.len()].to_string())
            .collect();
        Self {
            kind,
            labels,
            values,
            colors,
            axis,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

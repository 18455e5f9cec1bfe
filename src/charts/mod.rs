//! Chart lifecycle management.
//!
//! [`ChartManager`] keeps at most one live chart per container id. Drawing
//! into a container that already holds a chart destroys the old instance
//! first, so repeated renders never stack or leak. The drawing itself is
//! delegated to a [`ChartBackend`].

pub mod spec;

pub use spec::{ChartKind, ChartOptions, ChartSpec, ValueAxis, PALETTE};

use std::collections::HashMap;

/// Charting capability the manager draws through.
pub trait ChartBackend {
    /// Handle to one live chart; released via [`destroy`](Self::destroy).
    type Instance;

    /// Whether a display container with this id exists.
    fn container_exists(&self, container_id: &str) -> bool;

    fn draw(&mut self, container_id: &str, spec: &ChartSpec) -> Self::Instance;

    fn destroy(&mut self, instance: Self::Instance);
}

/// Descriptor returned for a chart that was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub container_id: String,
    pub kind: ChartKind,
}

pub struct ChartManager<B: ChartBackend> {
    backend: B,
    charts: HashMap<String, (ChartKind, B::Instance)>,
}

impl<B: ChartBackend> ChartManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            charts: HashMap::new(),
        }
    }

    /// Line chart over an ordered series; the value axis is fixed to [0, 1].
    ///
    /// Labels and values are paired positionally; any excess on the longer
    /// side is dropped.
    pub fn create_trend_chart(
        &mut self,
        container_id: &str,
        labels: &[String],
        values: &[f64],
        options: Option<ChartOptions>,
    ) -> Option<ChartHandle> {
        let n = labels.len().min(values.len());
        let spec = ChartSpec::new(
            ChartKind::TrendLine,
            labels[..n].to_vec(),
            values[..n].to_vec(),
            options.unwrap_or_default(),
        );
        self.render(container_id, spec)
    }

    /// Bar chart of per-platform counts, auto-scaled from zero.
    pub fn create_platform_chart(
        &mut self,
        container_id: &str,
        data: &[(String, f64)],
        options: Option<ChartOptions>,
    ) -> Option<ChartHandle> {
        self.render_pairs(ChartKind::PlatformBar, container_id, data, options)
    }

    /// Doughnut of category shares.
    pub fn create_category_chart(
        &mut self,
        container_id: &str,
        data: &[(String, f64)],
        options: Option<ChartOptions>,
    ) -> Option<ChartHandle> {
        self.render_pairs(ChartKind::CategoryDoughnut, container_id, data, options)
    }

    /// Radar of [0, 1] metrics.
    pub fn create_velocity_chart(
        &mut self,
        container_id: &str,
        data: &[(String, f64)],
        options: Option<ChartOptions>,
    ) -> Option<ChartHandle> {
        self.render_pairs(ChartKind::VelocityRadar, container_id, data, options)
    }

    /// Destroy the chart in `container_id`, if any.
    pub fn destroy_chart(&mut self, container_id: &str) {
        if let Some((kind, instance)) = self.charts.remove(container_id) {
            tracing::debug!("Destroying {} chart in #{}", kind, container_id);
            self.backend.destroy(instance);
        }
    }

    /// Destroy every tracked chart.
    pub fn destroy_all(&mut self) {
        for (_, (_, instance)) in self.charts.drain() {
            self.backend.destroy(instance);
        }
    }

    pub fn is_tracked(&self, container_id: &str) -> bool {
        self.charts.contains_key(container_id)
    }

    pub fn tracked_count(&self) -> usize {
        self.charts.len()
    }

    pub fn instance(&self, container_id: &str) -> Option<&B::Instance> {
        self.charts.get(container_id).map(|(_, instance)| instance)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn render_pairs(
        &mut self,
        kind: ChartKind,
        container_id: &str,
        data: &[(String, f64)],
        options: Option<ChartOptions>,
    ) -> Option<ChartHandle> {
        let (labels, values): (Vec<String>, Vec<f64>) = data.iter().cloned().unzip();
        let spec = ChartSpec::new(kind, labels, values, options.unwrap_or_default());
        self.render(container_id, spec)
    }

    fn render(&mut self, container_id: &str, spec: ChartSpec) -> Option<ChartHandle> {
        if !self.backend.container_exists(container_id) {
            tracing::debug!("Skipping {} chart: no container #{}", spec.kind, container_id);
            return None;
        }
        self.destroy_chart(container_id);
        let instance = self.backend.draw(container_id, &spec);
        self.charts
            .insert(container_id.to_string(), (spec.kind, instance));
        Some(ChartHandle {
            container_id: container_id.to_string(),
            kind: spec.kind,
        })
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::chart::{ChartDataset, ChartSlice};
use crate::models::portfolio::PortfolioValuation;
use crate::models::token::TokenHolding;

pub const CHART_TITLE: &str = "Token Distribution";
pub const NATIVE_SYMBOL: &str = "SOL";

/// A drawn chart owned by the view that mounted it.
pub trait ChartSurface {
    /// Release every drawing resource. Called exactly once, on unmount.
    fn dispose(&mut self);

    /// Text form of what was drawn, for renderers that have one.
    fn as_text(&self) -> Option<String> {
        None
    }
}

/// Draws a distribution dataset onto a new surface.
///
/// This is the only seam between the core and a charting library.
pub trait ChartRenderer {
    fn render(&self, dataset: &ChartDataset) -> Result<Box<dyn ChartSurface>, CoreError>;
}

/// A dataset together with the surface it was drawn on.
///
/// Dropping the mount disposes the surface, so unmounting a view can never
/// leak the chart.
pub struct MountedChart {
    dataset: ChartDataset,
    surface: Option<Box<dyn ChartSurface>>,
}

impl MountedChart {
    #[must_use]
    pub fn dataset(&self) -> &ChartDataset {
        &self.dataset
    }

    /// `false` when the renderer failed and the view shows no chart.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<&dyn ChartSurface> {
        self.surface.as_deref()
    }
}

impl Drop for MountedChart {
    fn drop(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
    }
}

impl std::fmt::Debug for MountedChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedChart")
            .field("dataset", &self.dataset)
            .field("drawn", &self.is_drawn())
            .finish()
    }
}

/// Builds the distribution dataset and mounts it on a renderer.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// One slice per held token (value = its total price), then one slice
    /// for SOL. Only the SOL label is rounded to cents; slice sizes keep
    /// full precision.
    #[must_use]
    pub fn build_dataset(
        &self,
        holdings: &[TokenHolding],
        valuation: &PortfolioValuation,
    ) -> ChartDataset {
        let mut slices: Vec<ChartSlice> = holdings
            .iter()
            .map(|h| ChartSlice {
                name: h.symbol.clone(),
                value: h.value_usd(),
                label_value: h.value_usd(),
                share_pct: 0.0,
            })
            .collect();

        slices.push(ChartSlice {
            name: NATIVE_SYMBOL.to_string(),
            value: valuation.native_value_usd,
            label_value: round_cents(valuation.native_value_usd),
            share_pct: 0.0,
        });

        let total: f64 = slices.iter().map(|s| s.value).sum();
        if total > 0.0 {
            for slice in &mut slices {
                slice.share_pct = slice.value / total * 100.0;
            }
        }

        ChartDataset {
            title: CHART_TITLE.to_string(),
            slices,
        }
    }

    /// Draw `dataset`. A renderer failure leaves the mount without a
    /// surface instead of failing the view.
    pub fn mount(&self, renderer: &dyn ChartRenderer, dataset: ChartDataset) -> MountedChart {
        let surface = match renderer.render(&dataset) {
            Ok(surface) => Some(surface),
            Err(e) => {
                log::warn!("Chart not drawn: {e}");
                None
            }
        };
        MountedChart { dataset, surface }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ── Headless renderer ───────────────────────────────────────────────

/// Renders the distribution as a text legend, one line per slice.
///
/// Used when no graphical renderer is attached. Tracks how many of its
/// surfaces are alive so callers can check that unmounting disposed them.
#[derive(Debug, Clone, Default)]
pub struct LegendRenderer {
    live: Arc<AtomicUsize>,
}

impl LegendRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces rendered and not yet disposed.
    #[must_use]
    pub fn live_surfaces(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl ChartRenderer for LegendRenderer {
    fn render(&self, dataset: &ChartDataset) -> Result<Box<dyn ChartSurface>, CoreError> {
        let mut lines = Vec::with_capacity(dataset.slices.len() + 1);
        lines.push(dataset.title.clone());
        for slice in &dataset.slices {
            lines.push(format!(
                "{} ${:.2} ({:.1}%)",
                slice.name, slice.label_value, slice.share_pct
            ));
        }
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(LegendSurface {
            lines,
            live: Arc::clone(&self.live),
            disposed: false,
        }))
    }
}

struct LegendSurface {
    lines: Vec<String>,
    live: Arc<AtomicUsize>,
    disposed: bool,
}

impl ChartSurface for LegendSurface {
    fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.lines.clear();
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn as_text(&self) -> Option<String> {
        Some(self.lines.join("\n"))
    }
}

pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use futures::future::AbortRegistration;
use serde::Serialize;

use config::DashboardConfig;
use errors::CoreError;
use models::{
    dashboard::{AccountSummary, PortfolioTable, TransactionTable},
    portfolio::{PortfolioValuation, WalletSnapshot},
    view::ViewState,
};
use providers::registry::DataSources;
use services::{
    aggregation_service::AggregationService,
    chart_service::{ChartRenderer, ChartService, LegendRenderer, MountedChart},
    fetch_service::FetchService,
    presentation_service::PresentationService,
    view_service::{ViewSelector, ViewTransition},
};

/// Where the dashboard is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// A load is in flight
    Loading,
    /// Every fetch succeeded
    Ready(Box<LoadedData>),
    /// The first fetch failure, message kept verbatim
    Failed(String),
}

/// A successful load: the joined snapshot and its valuation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedData {
    pub snapshot: WalletSnapshot,
    pub valuation: PortfolioValuation,
}

/// The presentation component currently mounted for the active view.
#[derive(Debug)]
pub enum MountedView {
    Account {
        summary: AccountSummary,
        chart: MountedChart,
    },
    Portfolio(PortfolioTable),
    Transactions(TransactionTable),
}

impl MountedView {
    #[must_use]
    pub fn view(&self) -> ViewState {
        match self {
            MountedView::Account { .. } => ViewState::AccountDetails,
            MountedView::Portfolio(_) => ViewState::PortfolioDetails,
            MountedView::Transactions(_) => ViewState::TransactionDetails,
        }
    }
}

/// What the frontend should draw right now.
#[derive(Debug)]
pub enum Screen<'a> {
    /// Full-screen loading indicator
    Loading,
    /// A single error line, e.g. "Error: Network error: ..."
    Error(String),
    /// The interactive dashboard: header, view menu, and the active view
    /// (if one has been picked).
    Dashboard {
        address: &'a str,
        menu: [ViewState; 3],
        active: Option<&'a MountedView>,
    },
}

/// Main entry point for the wallet dashboard core library.
///
/// Owns the load state, the view selector and the mounted view for one
/// wallet. All state changes go through `load*` and `select_view*`.
#[must_use]
pub struct WalletDashboard {
    address: String,
    fetch_service: FetchService,
    aggregation_service: AggregationService,
    presentation_service: PresentationService,
    chart_service: ChartService,
    renderer: Box<dyn ChartRenderer>,
    views: ViewSelector,
    load_state: LoadState,
    mounted: Option<MountedView>,
}

impl std::fmt::Debug for WalletDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.load_state {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Ready(_) => "ready",
            LoadState::Failed(_) => "failed",
        };
        f.debug_struct("WalletDashboard")
            .field("address", &self.address)
            .field("sources", self.fetch_service.sources())
            .field("load_state", &state)
            .field("view", &self.views.state())
            .field("mounted", &self.mounted.as_ref().map(MountedView::view))
            .finish()
    }
}

impl WalletDashboard {
    /// Build a dashboard with the default providers (Helius + CoinGecko)
    /// and the headless legend renderer.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, CoreError> {
        Self::new(config, DataSources::new_with_defaults(config))
    }

    /// Build a dashboard reading from the given data sources.
    pub fn new(config: &DashboardConfig, sources: DataSources) -> Result<Self, CoreError> {
        config::validate_address(&config.account_address)?;

        let fetch_service = FetchService::new(sources, config.token_filter())
            .with_signature_limit(config.signature_limit);

        Ok(Self {
            address: config.account_address.clone(),
            fetch_service,
            aggregation_service: AggregationService::new(),
            presentation_service: PresentationService::new(),
            chart_service: ChartService::new(),
            renderer: Box::new(LegendRenderer::new()),
            views: ViewSelector::new(),
            load_state: LoadState::Idle,
            mounted: None,
        })
    }

    /// Replace the chart renderer. Any mounted chart is redrawn with it.
    pub fn with_renderer(mut self, renderer: Box<dyn ChartRenderer>) -> Self {
        self.renderer = renderer;
        self.remount();
        self
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Fetch everything, then either install the data or record the failure.
    ///
    /// Any error leaves the dashboard in `LoadState::Failed` with no view
    /// mounted; the same error is returned to the caller.
    pub async fn load(&mut self) -> Result<(), CoreError> {
        self.load_state = LoadState::Loading;
        let result = self.fetch_service.fetch_snapshot(&self.address).await;
        self.apply_load(result)
    }

    /// Like `load`, but can be cancelled through the matching `AbortHandle`
    /// (e.g. when the hosting view is torn down). A cancelled load leaves
    /// the previous state untouched and returns `CoreError::Cancelled`.
    pub async fn load_abortable(&mut self, registration: AbortRegistration) -> Result<(), CoreError> {
        let previous = std::mem::replace(&mut self.load_state, LoadState::Loading);
        let result = self
            .fetch_service
            .fetch_snapshot_abortable(&self.address, registration)
            .await;

        if matches!(result, Err(CoreError::Cancelled)) {
            log::info!("Load for {} cancelled", self.address);
            self.load_state = previous;
            return Err(CoreError::Cancelled);
        }
        self.apply_load(result)
    }

    fn apply_load(&mut self, result: Result<WalletSnapshot, CoreError>) -> Result<(), CoreError> {
        match result {
            Ok(snapshot) => {
                let valuation = self.aggregation_service.value_snapshot(&snapshot);
                self.load_state = LoadState::Ready(Box::new(LoadedData {
                    snapshot,
                    valuation,
                }));
                self.remount();
                Ok(())
            }
            Err(e) => {
                self.mounted = None;
                self.load_state = LoadState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// True until a load has finished (successfully or not).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Idle | LoadState::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&LoadedData> {
        match &self.load_state {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&WalletSnapshot> {
        self.data().map(|d| &d.snapshot)
    }

    #[must_use]
    pub fn valuation(&self) -> Option<&PortfolioValuation> {
        self.data().map(|d| &d.valuation)
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Switch to `view`. On a real change the previous component is
    /// unmounted (disposing its chart) and the new one is mounted with the
    /// current data. Selecting the active view again changes nothing.
    pub fn select_view(&mut self, view: ViewState) -> ViewTransition {
        let transition = self.views.select(view);
        if transition.is_change() {
            log::debug!("View {} -> {}", transition.from, transition.to);
            self.remount();
        }
        transition
    }

    /// `select_view` by name, for frontends that pass strings.
    pub fn select_view_named(&mut self, name: &str) -> Result<ViewTransition, CoreError> {
        let view = name.parse::<ViewState>()?;
        Ok(self.select_view(view))
    }

    #[must_use]
    pub fn active_view(&self) -> ViewState {
        self.views.state()
    }

    #[must_use]
    pub fn mounted_view(&self) -> Option<&MountedView> {
        self.mounted.as_ref()
    }

    /// What to draw: loading indicator, error line, or the dashboard.
    #[must_use]
    pub fn screen(&self) -> Screen<'_> {
        match &self.load_state {
            LoadState::Idle | LoadState::Loading => Screen::Loading,
            LoadState::Failed(message) => Screen::Error(format!("Error: {message}")),
            LoadState::Ready(_) => Screen::Dashboard {
                address: &self.address,
                menu: ViewState::SELECTABLE,
                active: self.mounted.as_ref(),
            },
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Drop the mounted component and mount the active view with the
    /// current data, if there is any.
    fn remount(&mut self) {
        // The old chart must be disposed before the new one is drawn.
        self.mounted = None;

        let LoadState::Ready(data) = &self.load_state else {
            return;
        };
        let LoadedData {
            snapshot,
            valuation,
        } = data.as_ref();

        self.mounted = match self.views.state() {
            ViewState::None => None,
            ViewState::AccountDetails => {
                let dataset = self
                    .chart_service
                    .build_dataset(&snapshot.holdings, valuation);
                let summary =
                    self.presentation_service
                        .account_summary(snapshot, valuation, dataset.clone());
                let chart = self.chart_service.mount(self.renderer.as_ref(), dataset);
                Some(MountedView::Account { summary, chart })
            }
            ViewState::PortfolioDetails => Some(MountedView::Portfolio(
                self.presentation_service.portfolio_table(snapshot, valuation),
            )),
            ViewState::TransactionDetails => Some(MountedView::Transactions(
                self.presentation_service
                    .transaction_table(&snapshot.transactions),
            )),
        };
    }
}

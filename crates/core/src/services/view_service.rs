use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::view::ViewState;

/// Result of a selection: where the selector was and where it is now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTransition {
    pub from: ViewState,
    pub to: ViewState,
}

impl ViewTransition {
    /// False when the same view was selected again.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// Finite-state holder of the active dashboard view.
///
/// Starts at `ViewState::None`, moves unconditionally to whatever is
/// selected, never terminates and keeps no history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelector {
    state: ViewState,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn select(&mut self, view: ViewState) -> ViewTransition {
        let transition = ViewTransition {
            from: self.state,
            to: view,
        };
        self.state = view;
        transition
    }

    /// Select by view name (e.g. `"PortfolioDetails"`).
    pub fn select_named(&mut self, name: &str) -> Result<ViewTransition, CoreError> {
        let view = name.parse::<ViewState>()?;
        Ok(self.select(view))
    }
}

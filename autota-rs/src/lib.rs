//! AutoTA plugin
//!
//! Allows the agent to request a technical analysis chart by sending an
//! English text query (e.g. "Plot BTC on the 4H timeframe with RSI and
//! MACD") to `https://artificialcz.com/api0/autota/` or a user-configured
//! endpoint. The agent triggers it via the `AUTO_TA_REQUEST_CHART` action.

use std::sync::Arc;

use plugin_sdk::Plugin;

pub mod action;
pub mod config;
pub mod service;

pub use action::AutoTaRequestChartAction;
pub use config::AutoTaConfig;
pub use service::{AutoTaService, FALLBACK_TEXT, NO_ANALYSIS, NO_CHART_URL};


/// Construct the AutoTA plugin registration bundle: one [`AutoTaService`]
/// plus the [`AutoTaRequestChartAction`] that drives it.
pub fn plugin() -> Plugin {
    Plugin {
        name: "autota",
        description: "Generates technical analysis charts based on an English request string (ticker, timeframe, etc.).",
        services: vec![Arc::new(AutoTaService::new())],
        actions: vec![Arc::new(AutoTaRequestChartAction)],
        evaluators: vec![],
    }
}

pub mod market;
pub mod params;

pub use market::{MarketId, MarketQueryRow};
pub use params::{GetMarketsParams, SortColumn, SortLimitParams};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ReportingState
// ---------------------------------------------------------------------------

/// Lifecycle stage of a market's outcome determination, as stored in
/// `market_state.reporting_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportingState {
    PreReporting,
    DesignatedReporting,
    OpenReporting,
    CrowdsourcingDispute,
    AwaitingNextWindow,
    AwaitingFinalization,
    Finalized,
    Forking,
    AwaitingNoReportMigration,
    AwaitingForkMigration,
}

impl ReportingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingState::PreReporting => "PRE_REPORTING",
            ReportingState::DesignatedReporting => "DESIGNATED_REPORTING",
            ReportingState::OpenReporting => "OPEN_REPORTING",
            ReportingState::CrowdsourcingDispute => "CROWDSOURCING_DISPUTE",
            ReportingState::AwaitingNextWindow => "AWAITING_NEXT_WINDOW",
            ReportingState::AwaitingFinalization => "AWAITING_FINALIZATION",
            ReportingState::Finalized => "FINALIZED",
            ReportingState::Forking => "FORKING",
            ReportingState::AwaitingNoReportMigration => "AWAITING_NO_REPORT_MIGRATION",
            ReportingState::AwaitingForkMigration => "AWAITING_FORK_MIGRATION",
        }
    }
}

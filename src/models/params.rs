use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ReportingState;

// ---------------------------------------------------------------------------
// Sorting / paging
// ---------------------------------------------------------------------------

/// Columns a market listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Volume,
    OpenInterest,
    EndTime,
    CreationBlockNumber,
    MarketId,
    ReportingStateUpdatedOn,
    LastTradeTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortLimitParams {
    pub sort_by: Option<SortColumn>,
    pub is_sort_descending: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

// ---------------------------------------------------------------------------
// GetMarketsParams
// ---------------------------------------------------------------------------

/// Filter request for the market listing.
///
/// Sort/paging fields are kept flat rather than `#[serde(flatten)]`ed so that
/// numeric fields still parse from URL query strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMarketsParams {
    pub universe: String,
    pub creator: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub reporting_state: Option<ReportingState>,
    pub fee_window: Option<String>,
    pub designated_reporter: Option<String>,
    pub max_fee: Option<Decimal>,
    pub sort_by: Option<SortColumn>,
    pub is_sort_descending: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("universe must not be empty")]
    EmptyUniverse,

    #[error("maxFee must be non-negative, got {0}")]
    NegativeMaxFee(Decimal),

    #[error("limit {limit} exceeds the maximum page size of {max}")]
    LimitTooLarge { limit: u32, max: u32 },
}

impl GetMarketsParams {
    pub fn for_universe(universe: impl Into<String>) -> Self {
        Self {
            universe: universe.into(),
            ..Default::default()
        }
    }

    pub fn sort_limit(&self) -> SortLimitParams {
        SortLimitParams {
            sort_by: self.sort_by,
            is_sort_descending: self.is_sort_descending,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Structural checks that the type system alone does not cover.
    pub fn validate(&self, max_page_size: u32) -> Result<(), ParamsError> {
        if self.universe.trim().is_empty() {
            return Err(ParamsError::EmptyUniverse);
        }
        if let Some(max_fee) = self.max_fee {
            if max_fee < Decimal::ZERO {
                return Err(ParamsError::NegativeMaxFee(max_fee));
            }
        }
        if let Some(limit) = self.limit {
            if limit > max_page_size {
                return Err(ParamsError::LimitTooLarge {
                    limit,
                    max: max_page_size,
                });
            }
        }
        Ok(())
    }
}

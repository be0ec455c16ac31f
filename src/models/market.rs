use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use sqlx::FromRow;
use std::fmt;
use std::sync::Arc;

/// Market identifier (contract address). Opaque to the query layer and
/// cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketId(Arc<str>);

impl From<String> for MarketId {
    fn from(s: String) -> Self {
        MarketId(Arc::from(s))
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        MarketId(Arc::from(s))
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MarketId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Row produced by the market filter query.
///
/// The fee rate columns are only selected when a fee ceiling is requested;
/// otherwise they decode as `None`.
#[derive(Debug, Clone, FromRow)]
pub struct MarketQueryRow {
    pub market_id: String,
    /// Unix seconds of the block that set the current reporting state.
    pub reporting_state_updated_on: i64,
    /// Unix seconds of the block holding the last trade, if any.
    pub last_trade_time: Option<i64>,
    #[sqlx(default)]
    pub reporting_fee_rate: Option<Decimal>,
    #[sqlx(default)]
    pub market_creator_fee_rate: Option<Decimal>,
}

impl MarketQueryRow {
    /// Reporting fee plus creator fee, or `None` if either column was not fetched.
    pub fn total_fee_rate(&self) -> Option<Decimal> {
        Some(self.reporting_fee_rate? + self.market_creator_fee_rate?)
    }
}

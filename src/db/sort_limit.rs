use sqlx::{Postgres, QueryBuilder};

use crate::models::{SortColumn, SortLimitParams};

/// SQL expression a sort column maps to. Only whitelisted expressions ever
/// reach the ORDER BY clause.
pub fn sort_expression(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Volume => "markets.volume",
        SortColumn::OpenInterest => "markets.open_interest",
        SortColumn::EndTime => "markets.end_time",
        SortColumn::CreationBlockNumber => "markets.creation_block_number",
        SortColumn::MarketId => "markets.market_id",
        SortColumn::ReportingStateUpdatedOn => "market_state_block.timestamp",
        SortColumn::LastTradeTime => "last_trade_block.timestamp",
    }
}

/// Append ORDER BY / LIMIT / OFFSET to a market query.
///
/// Ties on the sort key are broken by `markets.market_id` ascending so
/// repeated calls page identically. Descending sorts put NULLs last.
pub fn apply_sort_limit(
    builder: &mut QueryBuilder<'_, Postgres>,
    default_sort: SortColumn,
    default_descending: bool,
    params: &SortLimitParams,
) {
    let column = params.sort_by.unwrap_or(default_sort);
    let descending = params.is_sort_descending.unwrap_or(default_descending);

    builder.push(" ORDER BY ");
    builder.push(sort_expression(column));
    builder.push(if descending { " DESC NULLS LAST" } else { " ASC NULLS FIRST" });
    if column != SortColumn::MarketId {
        builder.push(", markets.market_id ASC");
    }

    if let Some(limit) = params.limit {
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(limit));
    }
    if let Some(offset) = params.offset {
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(offset));
    }
}

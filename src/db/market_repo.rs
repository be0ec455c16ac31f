use std::time::Instant;

use metrics::{counter, histogram};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::sort_limit::apply_sort_limit;
use crate::models::{GetMarketsParams, MarketId, MarketQueryRow, SortColumn};
use crate::search::SearchProvider;

const DEFAULT_SORT: SortColumn = SortColumn::Volume;
const DEFAULT_DESCENDING: bool = true;

/// Build the market filter query.
///
/// Fee rate columns are only selected when `max_fee` is set; the fee ceiling
/// itself is never part of the SQL predicate (see [`retain_within_max_fee`]).
/// A `search` criterion without a provider is dropped.
pub fn build_markets_query<'a>(
    search: Option<&dyn SearchProvider>,
    params: &GetMarketsParams,
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(
        "SELECT markets.market_id, \
         market_state_block.timestamp AS reporting_state_updated_on, \
         last_trade_block.timestamp AS last_trade_time",
    );
    if params.max_fee.is_some() {
        builder.push(", markets.reporting_fee_rate, markets.market_creator_fee_rate");
    }
    builder.push(
        " FROM markets \
         JOIN market_state ON market_state.market_state_id = markets.market_state_id \
         JOIN blocks AS market_state_block ON market_state_block.block_number = market_state.block_number \
         LEFT JOIN blocks AS last_trade_block ON last_trade_block.block_number = markets.last_trade_block_number",
    );

    builder.push(" WHERE markets.universe = ");
    builder.push_bind(params.universe.clone());

    if let Some(creator) = &params.creator {
        builder.push(" AND markets.market_creator = ");
        builder.push_bind(creator.clone());
    }
    if let Some(category) = &params.category {
        builder.push(" AND LOWER(markets.category) = ");
        builder.push_bind(category.to_lowercase());
    }
    if let Some(state) = params.reporting_state {
        builder.push(" AND market_state.reporting_state = ");
        builder.push_bind(state.as_str());
    }
    if let Some(fee_window) = &params.fee_window {
        builder.push(" AND markets.fee_window = ");
        builder.push_bind(fee_window.clone());
    }
    if let Some(reporter) = &params.designated_reporter {
        builder.push(" AND markets.designated_reporter = ");
        builder.push_bind(reporter.clone());
    }

    match (&params.search, search) {
        (Some(text), Some(provider)) => {
            builder.push(" AND markets.market_id IN (");
            provider.push_match_subquery(&mut builder, text);
            builder.push(")");
        }
        (Some(_), None) => {
            tracing::debug!(universe = %params.universe, "No search provider configured, ignoring search");
        }
        (None, _) => {}
    }

    apply_sort_limit(&mut builder, DEFAULT_SORT, DEFAULT_DESCENDING, &params.sort_limit());
    builder
}

/// Drop rows whose reporting + creator fee exceeds `max_fee`. The boundary is
/// inclusive and the remaining rows keep their order. Rows without both fee
/// columns are dropped.
pub fn retain_within_max_fee(rows: &mut Vec<MarketQueryRow>, max_fee: Decimal) {
    rows.retain(|row| row.total_fee_rate().is_some_and(|fee| fee <= max_fee));
}

/// Market identifiers matching `params`, in the requested sort order.
pub async fn get_markets(
    pool: &PgPool,
    search: Option<&dyn SearchProvider>,
    params: &GetMarketsParams,
) -> anyhow::Result<Vec<MarketId>> {
    let started = Instant::now();
    counter!("market_queries_total").increment(1);

    let mut builder = build_markets_query(search, params);
    let result = builder
        .build_query_as::<MarketQueryRow>()
        .fetch_all(pool)
        .await;
    histogram!("market_query_latency_seconds").record(started.elapsed().as_secs_f64());

    let mut rows = match result {
        Ok(rows) => rows,
        Err(e) => {
            counter!("market_query_errors_total").increment(1);
            tracing::warn!(universe = %params.universe, error = %e, "Market query failed");
            return Err(e.into());
        }
    };

    let fetched = rows.len();
    if let Some(max_fee) = params.max_fee {
        retain_within_max_fee(&mut rows, max_fee);
        counter!("markets_removed_by_fee_total").increment((fetched - rows.len()) as u64);
    }

    tracing::debug!(
        universe = %params.universe,
        fetched,
        returned = rows.len(),
        "Market query complete"
    );

    Ok(rows.into_iter().map(|row| MarketId::from(row.market_id)).collect())
}

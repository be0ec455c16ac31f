use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register the query-layer metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("market_queries_total").absolute(0);
    counter!("market_query_errors_total").absolute(0);
    counter!("markets_removed_by_fee_total").absolute(0);

    // Histogram is lazily created on first record; force creation.
    histogram!("market_query_latency_seconds").record(0.0);

    Ok(handle)
}

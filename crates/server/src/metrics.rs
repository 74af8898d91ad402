use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CUSTOMER_OPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "customer_ledger_customer_ops_total",
        "Customer operations by op and outcome",
        &["op", "outcome"]
    )
    .expect("register customer_ops_total")
});

pub static STATS_REQUESTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "customer_ledger_stats_requests_total",
        "Dashboard stats computations"
    )
    .expect("register stats_requests_total")
});

/// Count one customer operation; `outcome` is `ok` or the error kind.
pub fn record_customer_op<T, E>(op: &str, res: &Result<T, E>, kind: impl Fn(&E) -> &'static str) {
    let outcome = match res {
        Ok(_) => "ok",
        Err(e) => kind(e),
    };
    CUSTOMER_OPS_TOTAL.with_label_values(&[op, outcome]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

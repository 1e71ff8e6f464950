use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, TextEncoder};

/// Handler that serialises Prometheus metrics in text format.
pub async fn metrics_handler() -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(_) => HttpResponse::Ok()
            .content_type(encoder.format_type())
            .body(buffer),
        Err(err) => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

pub static SIGNUPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "partypass_signups_total",
        "Total number of successful signups",
    )
});

pub static LOGINS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "partypass_logins_total",
        "Total number of successful logins",
    )
});

fn register_counter(name: &str, help: &str) -> IntCounter {
    let counter = IntCounter::new(name, help).expect("valid metric definition");
    // A duplicate registration error is ignored; the counter still counts.
    let _ = prometheus::default_registry().register(Box::new(counter.clone()));
    counter
}

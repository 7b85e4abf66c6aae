//! Request relay handler
//!
//! A pure mapping from `(method, headers, body)` to [`RelayResponse`]. The
//! only I/O is the provider fetch behind [`ProviderFetcher`].

use axum::http::{header::ORIGIN, HeaderMap, Method};
use serde_json::Value;
use tracing::{warn, Instrument};

use crate::{
    error::{AppError, AppResult},
    proxy::{logging::RequestContext, Provider, ProviderFetcher},
    relay::{request::RelayRequest, response::RelayResponse},
    routes::metrics::record_relay,
};

/// Handle one relay request
///
/// - `OPTIONS` answers the CORS preflight without reading the body
/// - any other method is treated as a relay: parse, validate, fetch
///
/// Failures never escape; they become a JSON error envelope.
pub async fn handle<F>(
    fetcher: &F,
    method: &Method,
    headers: &HeaderMap,
    body: &[u8],
) -> RelayResponse
where
    F: ProviderFetcher + ?Sized,
{
    if *method == Method::OPTIONS {
        return RelayResponse::preflight();
    }

    let origin = headers.get(ORIGIN).and_then(|v| v.to_str().ok());
    let mut ctx = RequestContext::default();

    let response = match relay(fetcher, body, origin, &mut ctx).await {
        Ok(payload) => {
            ctx.log_request_complete();
            RelayResponse::success(&payload)
        }
        Err(err @ AppError::MissingFields) => {
            warn!(trace_id = %ctx.trace_id, error = %err, "Rejected relay request");
            RelayResponse::from_error(&err)
        }
        Err(err) => {
            ctx.log_error(&err.to_string());
            RelayResponse::from_error(&err)
        }
    };

    // Caller-supplied names are not used as labels
    let label = ctx
        .provider
        .parse::<Provider>()
        .map(|p| p.name())
        .unwrap_or("other");
    record_relay(
        label,
        response.status.as_u16(),
        ctx.start_time.elapsed().as_secs_f64(),
    );

    response
}

async fn relay<F>(
    fetcher: &F,
    body: &[u8],
    origin: Option<&str>,
    ctx: &mut RequestContext,
) -> AppResult<Value>
where
    F: ProviderFetcher + ?Sized,
{
    let request = RelayRequest::parse(body)?;
    let (provider, api_key) = request.credentials()?;

    ctx.provider = provider.to_string();
    ctx.log_request_start(origin);

    fetcher
        .fetch(provider, &api_key)
        .instrument(ctx.create_span())
        .await
}

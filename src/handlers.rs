use actix_web::http::{header, Method};
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use log::{debug, warn};
use serde_json::Value;

use crate::config::Config;
use crate::error::{ApiError, ALLOWED_METHODS};
use crate::models::{json_kind, AqiCategory, PredictionResponse};
use crate::predictor::Predictor;

/// Adds the wildcard origin to every response, errors included.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

/// Serves the prediction resource on every path.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .route(web::post().to(predict))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

pub async fn predict(
    req: HttpRequest,
    payload: web::Payload,
    predictor: web::Data<Predictor>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ApiError> {
    let outcome = read_body(&req, payload, config.max_body_bytes)
        .await
        .and_then(|body| score_body(&predictor, &body));

    match outcome {
        Ok(prediction) => {
            debug!(
                "Predicted AQI {} ({})",
                prediction,
                AqiCategory::from_score(prediction).label()
            );
            Ok(HttpResponse::Ok().json(PredictionResponse { prediction }))
        }
        Err(e) => {
            warn!("Rejected prediction request: {}", e);
            Err(e)
        }
    }
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    warn!("Rejected {} {}", req.method(), req.path());
    Err(ApiError::MethodNotAllowed(req.method().clone()))
}

async fn read_body(
    req: &HttpRequest,
    mut payload: web::Payload,
    limit: usize,
) -> Result<web::BytesMut, ApiError> {
    let declared = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    if declared.is_some_and(|len| len > limit) {
        return Err(ApiError::PayloadTooLarge { limit });
    }

    let mut body = web::BytesMut::with_capacity(declared.unwrap_or(0));
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| ApiError::Payload(e.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(ApiError::PayloadTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

fn score_body(predictor: &Predictor, body: &[u8]) -> Result<u16, ApiError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ApiError::MalformedBody(format!("invalid UTF-8: {}", e)))?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(params) => Ok(predictor.predict_json(&params)?),
        other => Err(ApiError::MalformedBody(format!(
            "expected an object, found {}",
            json_kind(&other)
        ))),
    }
}

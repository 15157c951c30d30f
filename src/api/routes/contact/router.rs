//! Router for the contact form API

use std::sync::{Arc, LazyLock};

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::post,
};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use uuid::Uuid;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{6,}$").expect("Invalid phone regex"));

/// Names of the fields that are missing or malformed, in form order.
pub fn invalid_fields(req: &public::ContactRequest) -> Vec<String> {
    let mut invalid = Vec::new();

    let required = [
        ("name", &req.name),
        ("email", &req.email),
        ("phone", &req.phone),
        ("from", &req.from),
        ("to", &req.to),
        ("date", &req.date),
        ("time", &req.time),
    ];
    for (field, value) in required {
        let value = value.trim();
        let valid = match field {
            "email" => EMAIL_RE.is_match(value),
            "phone" => PHONE_RE.is_match(value),
            "date" => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            "time" => NaiveTime::parse_from_str(value, "%H:%M").is_ok(),
            _ => !value.is_empty(),
        };
        if !valid {
            invalid.push(field.to_string());
        }
    }

    invalid
}

/// Accept a booking/contact request from the site
async fn contact_handler(
    payload: Result<Json<public::ContactRequest>, JsonRejection>,
) -> Result<Json<public::ContactResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Invalid contact request body: {}", rejection.body_text());
        ApiError::bad_request("Invalid contact request")
    })?;

    let invalid = invalid_fields(&payload);
    if !invalid.is_empty() {
        return Err(ApiError::invalid_fields(
            "Please fill in all required fields",
            invalid,
        ));
    }

    let id = Uuid::new_v4().to_string();
    tracing::info!(
        "Contact request {} received: {} -> {} on {} at {}",
        id,
        payload.from.trim(),
        payload.to.trim(),
        payload.date.trim(),
        payload.time.trim()
    );

    Ok(Json(public::ContactResponse::new(&id)))
}

/// Create the contact router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(contact_handler))
}

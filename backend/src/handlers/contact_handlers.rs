use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use dhyan_common::{ContactRequest, ContactResponse};

use crate::error::AppResult;
use crate::utils::rate_limit::{contact_quota, ClientIp, CONTACT_BUCKET};
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    client_ip: ClientIp,
    Json(request): Json<ContactRequest>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    state
        .limits
        .check(CONTACT_BUCKET, contact_quota(), client_ip.key())?;

    let request = request.validate()?;
    state.contacts.create(request, client_ip.0)?;
    tracing::info!("Stored contact message");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            message: "Thanks for reaching out! We'll get back to you soon.".to_string(),
        }),
    ))
}

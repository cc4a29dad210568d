//! Link id generation.
//!
//! Ids are random URL-safe strings; callers that must never reuse an id
//! check candidates against the ids they have already issued.

use crate::domain::entities::LinkId;
use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Attempts before giving up on finding an unused id.
const MAX_ATTEMPTS: usize = 10;

/// Generates a random link id.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character id.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_link_id() -> Result<LinkId, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(LinkId::new(
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer),
    ))
}

/// Generates an id for which `is_taken` returns false.
///
/// Retries up to 10 times on collision before failing.
///
/// # Errors
///
/// Returns [`AppError::Internal`] on repeated collisions or RNG failure.
pub fn generate_unique_link_id(is_taken: impl Fn(&LinkId) -> bool) -> Result<LinkId, AppError> {
    for _ in 0..MAX_ATTEMPTS {
        let id = generate_link_id()?;
        if !is_taken(&id) {
            return Ok(id);
        }
    }

    Err(AppError::internal(
        "Failed to generate unique link id",
        json!({ "reason": "Too many collisions" }),
    ))
}

use crate::helpers::jwt::extract_bearer_token;
use crate::helpers::JwtManager;
use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use std::sync::Arc;

/// Why a sent token was not accepted. Stored in the request extensions so the
/// authorization gate can report it.
#[derive(Debug, Clone)]
pub struct Rejection(pub String);

/// `Ok(false)` when no Authorization header is sent, `Ok(true)` once verified
/// claims are stored as `Arc<Claims>` in the request extensions.
#[tracing::instrument(name = "Authenticate with JWT", skip(req))]
pub fn try_jwt(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = match get_header::<String>(req, "authorization")? {
        Some(authorization) => authorization,
        None => return Ok(false),
    };

    let token = extract_bearer_token(&authorization)?;

    let jwt = req
        .app_data::<web::Data<JwtManager>>()
        .ok_or_else(|| "token verifier is not configured".to_string())?;

    let claims = jwt
        .verify(token)
        .map_err(|err| format!("Invalid or expired JWT: {}", err))?;

    tracing::debug!("JWT authentication successful for {}", claims.email);
    if req.extensions_mut().insert(Arc::new(claims)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}

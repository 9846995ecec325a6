//! `GatewayUser` extractor — reads the identity the auth gateway injected.
//!
//! Authentication and the chama-membership/role check happen upstream; by
//! the time a request reaches this service the gateway has verified the
//! actor and attached identity headers. The extractor trusts them
//! completely and performs no independent permission check.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use chamahub_core::error::AppError;
use chamahub_entity::membership::MemberRole;
use chamahub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the verified actor ID.
const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the actor's role in the addressed chama.
const USER_ROLE_HEADER: &str = "x-user-role";

/// Extracted gateway-authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct GatewayUser(pub RequestContext);

impl std::ops::Deref for GatewayUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for GatewayUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing gateway identity header"))?;

        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::unauthorized("Malformed gateway identity header"))?;

        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::parse)
            .transpose()?
            .unwrap_or(MemberRole::Member);

        Ok(GatewayUser(RequestContext::new(user_id, role)))
    }
}

//! Request context carrying the gateway-authenticated actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use chamahub_entity::membership::MemberRole;

/// Context for the current authenticated request.
///
/// Authentication and the chama-membership check happen at the upstream
/// gateway; this context records *who* the gateway vouched for so audit
/// entries and logs can attribute actions. The core performs no permission
/// checks of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role in the chama being addressed.
    pub role: MemberRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: MemberRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }
}

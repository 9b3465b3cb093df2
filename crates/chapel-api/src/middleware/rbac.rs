//! Staff gate in front of the `/admin` routes.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::extractors::{ActiveMember, StaffContext};

/// Lets only active Admin and Staff members through.
///
/// The resolved context is left in the request extensions for the
/// `StaffMember` extractor.
pub async fn require_staff(
    ActiveMember(ctx): ActiveMember,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    ctx.require_staff()?;
    request.extensions_mut().insert(StaffContext(ctx));
    Ok(next.run(request).await)
}

//! Audience check for single-document fetches.

use chrono::{DateTime, Utc};

use chapel_core::error::AppError;
use chapel_entity::audience::{Hidden, Targeted, Viewer};

/// Refuses a fetch of `doc` the viewer is outside the audience of.
///
/// Drafts and expired documents are refused the same way as documents
/// targeted elsewhere; the caller already knows the id exists.
pub fn ensure_visible<T: Targeted>(doc: &T, viewer: &Viewer, now: DateTime<Utc>) -> Result<(), AppError> {
    doc.visibility(viewer, now).map_err(|hidden| {
        let message = match hidden {
            Hidden::Unpublished => "This item is not published",
            Hidden::Expired => "This item has expired",
            Hidden::OutsideAudience => "This item is not available to you",
        };
        AppError::forbidden(message)
    })
}

//! Request query shapes and response envelopes.

pub mod request;
pub mod response;

//! JWT token encoding, decoding, and revocation.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod service;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
pub use error::TokenError;
pub use service::TokenService;

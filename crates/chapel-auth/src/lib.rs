//! # chapel-auth
//!
//! Authentication and authorization for Chapel.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and length policy
//! - `jwt`: HS256 token issue, verification and revocation
//! - `resolver`: bearer token to live member
//! - `rbac`: role allow-list gate
//! - `audience`: single-document audience enforcement

pub mod audience;
pub mod jwt;
pub mod password;
pub mod rbac;
pub mod resolver;

pub use jwt::{Claims, IssuedToken, TokenError, TokenService};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{require_role, require_staff};
pub use resolver::AuthResolver;

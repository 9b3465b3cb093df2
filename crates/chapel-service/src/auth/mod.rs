//! Registration, login, password change and logout.

pub mod service;

pub use service::{AuthService, AuthSession, ChangePasswordRequest, LoginRequest, RegisterRequest};

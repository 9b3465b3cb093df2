//! Event domain entities.

pub mod model;
pub mod registration;
pub mod volunteer;

pub use model::{CreateEvent, Event, UpdateEvent};
pub use registration::{EventRegistration, RegistrationStatus};
pub use volunteer::{VolunteerSignup, VolunteerStatus};

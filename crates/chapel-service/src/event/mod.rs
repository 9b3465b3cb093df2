//! Events, RSVPs and volunteer signups.

pub mod service;

pub use service::{CreateEventRequest, EventRoster, EventService, VolunteerRequest};

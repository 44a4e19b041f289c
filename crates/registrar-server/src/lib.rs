//! # registrar-server
//!
//! HTTP surface for the course registration service.
//!
//! ```text
//! request -> TraceLayer -> AuthContext extractor -> handler
//!                                                     |
//!                         spawn_blocking(IRegistryStorage + EnrollmentPolicy)
//!                                                     |
//!                               Html view  |  Json {success, message, data?}
//! ```
//!
//! Pages (`/login`, `/register`, `/courses`) are rendered on the server;
//! the enrollment endpoints answer JSON for the page's buttons.

pub mod auth;
pub mod error;
pub mod inspect;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod views;

pub use routes::build_router;
pub use state::AppState;

//! HTTP front end for the urlmini shortener.
//!
//! Translates shortener results into HTTP responses: malformed input is a
//! 400, an unknown alias a 404, fragment exhaustion a 503 and store failures
//! a 500.

pub mod app;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;

mod health;
mod url;

pub use health::health_handler;
pub use url::{expand_handler, minify_handler};

mod url;

pub use url::{
    ErrorResponse, ExpandQuery, ExpandResponse, HealthResponse, MinifyRequest, MinifyResponse,
};

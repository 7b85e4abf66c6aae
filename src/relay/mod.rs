//! Request relay
//!
//! Turns an inbound `(method, headers, body)` into the provider's JSON
//! payload or an error envelope, with CORS headers on every path.

pub mod cors;
pub mod handler;
pub mod request;
pub mod response;

pub use handler::handle;
pub use request::RelayRequest;
pub use response::RelayResponse;

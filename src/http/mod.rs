//! HTTP protocol layer module
//!
//! Status-code response builders, decoupled from specific business logic.

pub mod response;

pub use response::{
    build_405_response, build_413_response, build_health_response, build_options_response,
};

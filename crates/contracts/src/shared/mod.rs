pub mod api;
pub mod location;
pub mod serde_utils;
pub mod status_flow;
pub mod validation;

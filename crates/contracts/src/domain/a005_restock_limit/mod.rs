pub mod aggregate;

pub use aggregate::{RestockLimit, RestockLimitDto, RestockLimitPayload, RestockStatus};

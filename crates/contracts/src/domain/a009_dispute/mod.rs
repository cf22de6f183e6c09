pub mod aggregate;

pub use aggregate::{Dispute, DisputeDto, DisputePayload, DisputeStatus, SettlementDto};

pub mod aggregate;

pub use aggregate::{Dealer, DealerDto, KycDocument, KycStatus, REQUIRED_KYC_DOCUMENTS};

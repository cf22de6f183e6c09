pub mod aggregate;
pub mod resolver;

pub use aggregate::{BrandThreshold, ProductThreshold, ThresholdSettings};
pub use resolver::{ResolvedThreshold, ThresholdBook, ThresholdSource};

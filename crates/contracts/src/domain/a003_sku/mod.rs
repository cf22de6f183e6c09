pub mod aggregate;
pub mod derived;

pub use aggregate::{Brand, ProjectType, SkuRecord};
pub use derived::{derive_options, DerivedOptions, SkuAutofill, SkuFilter};

pub mod summary;

pub use summary::{summarize_by_brand, BrandStockSummary, UNBRANDED};

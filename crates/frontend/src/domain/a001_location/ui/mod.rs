pub mod cascade_selector;

pub use cascade_selector::LocationCascadeSelector;

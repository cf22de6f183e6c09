pub mod cascade;
pub mod level;

pub use cascade::{
    ApplyOutcome, CascadeError, FetchRequest, LevelConfig, LocationCascade, MultiSelectPolicy,
    Selection,
};
pub use level::{LocationLevel, LocationNode};

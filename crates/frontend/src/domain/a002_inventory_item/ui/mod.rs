pub mod add;
pub mod overview;

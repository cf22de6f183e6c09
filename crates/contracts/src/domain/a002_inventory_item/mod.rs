pub mod aggregate;
pub mod form;

pub use aggregate::{CreateInventoryItemDto, InventoryItem};
pub use form::{InventoryForm, InventoryFormAction, MAX_QUANTITY};

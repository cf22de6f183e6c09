//! Tab management: content registry, titles, the tab strip and the page wrapper.

pub mod page;
pub mod registry;
pub mod tab_bar;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_bar::TabBar;
pub use tab_labels::tab_label_for_key;

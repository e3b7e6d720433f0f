//! Tab management: page wrapper, key -> view registry, labels, tab strip.

pub mod page;
pub mod registry;
pub mod strip;
pub mod tab_labels;

pub use page::TabPage;
pub use strip::TabStrip;
pub use tab_labels::tab_label_for_key;

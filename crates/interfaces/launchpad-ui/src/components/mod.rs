pub mod forms;
pub mod header;
pub mod modal;
pub mod overlays;
pub mod palette;
pub mod sidebar;
pub mod statcards;
pub mod table;
pub mod toast;

pub mod clear_history;
pub mod export_history;
pub mod get_history;
pub mod save_history_entry;

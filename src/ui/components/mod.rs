// UI Components
pub mod add_form;
pub mod command_bar;
pub mod dialog;
pub mod dir_table;
pub mod header;
pub mod input_field;
pub mod status_bar;
pub mod tab_bar;
pub mod warning;

// Re-export components for convenience
pub use add_form::AddForm;
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{ConfirmPurpose, Dialog, DialogKind};
pub use dir_table::DirTable;
pub use header::{Header, HeaderState};
pub use status_bar::{NoticeLevel, StatusBar};
pub use tab_bar::{TabBar, TabLabel};
pub use warning::WarningScreen;

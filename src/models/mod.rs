// Data Models
pub mod edit_form;
pub mod group_tab;
pub mod panel;
pub mod storage_group;
pub mod text_input;

pub use edit_form::{EditForm, FormField};
pub use group_tab::{DirRow, RowKey};
pub use panel::{LoadState, StorageGroupPanel};
pub use storage_group::{DirRequest, HostFilter, StorageGroupDir, ALL_HOSTS};
pub use text_input::TextInput;

// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

pub use layout::LayoutManager;
pub use theme::{Theme, ThemeManager};

pub use components::{
    AddForm, CommandBar, CommandItem, ConfirmPurpose, Dialog, DialogKind, DirTable, Header,
    HeaderState, NoticeLevel, StatusBar, TabBar, TabLabel, WarningScreen,
};

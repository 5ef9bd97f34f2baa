pub mod channel_directory;
pub mod channel_list;
pub mod icon;
pub mod notification;
pub mod pagination;
pub mod top;
pub use top::Top;

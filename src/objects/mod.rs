mod channel;
pub use channel::Channel;
mod channel_action;
pub use channel_action::*;
mod directory_config;
pub use directory_config::DirectoryConfig;
mod directory_state;
pub use directory_state::*;
mod js_error;
pub use js_error::JsError;
mod list_request;
pub use list_request::ListRequest;
mod page_state;
pub use page_state::PageState;
pub mod render;
pub use render::{render_channels, render_pagination, ChannelEntry, PaginationView};
mod sequencer;
pub use sequencer::{RequestSequencer, RequestToken};

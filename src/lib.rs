pub mod agents;
pub mod components;
pub mod objects;
pub mod utils;

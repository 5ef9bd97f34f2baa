pub mod fetcher;
pub mod notifier;

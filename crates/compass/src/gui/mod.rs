pub mod app;
pub mod notifier;
pub mod theme;

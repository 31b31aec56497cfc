pub mod commands;
pub mod dispatcher;
pub mod form;
pub mod notifier;
pub mod render;

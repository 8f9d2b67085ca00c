pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod intent;
pub mod parse;
pub mod prompts;
pub mod providers;
pub mod repl;
pub mod router;
pub mod session;

pub mod client;
pub mod loader;
pub mod record;

pub use client::*;
pub use loader::*;
pub use record::*;

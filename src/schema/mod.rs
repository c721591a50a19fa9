pub mod groups;
pub mod strings;
pub mod types;

pub use groups::*;
pub use strings::*;
pub use types::*;

pub mod overrides;
pub mod storage;

pub use overrides::*;
pub use storage::*;

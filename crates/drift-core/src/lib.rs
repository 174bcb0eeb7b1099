pub mod constants;
pub mod debounce;
pub mod field;
pub mod motion;

pub use constants::*;
pub use debounce::*;
pub use field::*;
pub use motion::*;

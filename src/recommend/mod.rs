pub mod catalog;
pub mod mood;
pub mod resolver;
pub mod selector;
pub mod session;


pub use catalog::*;
pub use mood::*;
pub use resolver::*;
pub use selector::*;
pub use session::*;

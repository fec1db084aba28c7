pub mod page;
pub mod pointer;

pub use page::*;
pub use pointer::*;

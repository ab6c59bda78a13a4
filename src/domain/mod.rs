pub mod product;
pub mod responses;

pub use product::*;
pub use responses::*;

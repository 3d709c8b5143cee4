pub mod draft;
pub mod product;

pub use draft::*;
pub use product::*;

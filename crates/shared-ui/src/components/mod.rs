pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Re-exports for convenience
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use textarea::*;

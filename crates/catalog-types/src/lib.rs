pub mod error;
pub mod form;
pub mod product;
pub mod view;

pub use error::{Error, Result};
pub use form::*;
pub use product::*;
pub use view::*;

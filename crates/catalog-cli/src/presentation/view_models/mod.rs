pub mod catalog;
pub mod common;

pub use catalog::{
    FormFieldViewModel, FormViewModel, ProductPageViewModel, ProductRowViewModel,
    ProductsScreenViewModel, SearchBoxViewModel, StatusBarViewModel,
};
pub use common::StatusLevel;

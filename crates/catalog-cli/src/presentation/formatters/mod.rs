pub mod price;
pub mod text;
pub mod time;

pub use price::format_price;
pub use text::truncate;
pub use time::format_added;

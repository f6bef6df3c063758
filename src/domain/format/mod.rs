pub mod currency;
pub mod date;
pub mod error;
pub mod locale;

pub use currency::{format_currency, format_currency_with};
pub use date::{format_date, format_date_with, parse_date};
pub use error::FormatError;
pub use locale::Locale;

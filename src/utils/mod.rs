pub mod url_validator;

pub use url_validator::{is_plausible_url, truncate_url};

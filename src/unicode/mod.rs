pub mod charset;
pub mod percent_encode;

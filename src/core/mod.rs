pub mod charset;
pub mod escape;
pub mod letter_map;
pub mod transformer;

pub mod paths;
pub mod style;

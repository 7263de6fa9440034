pub mod composite;
pub mod fade;
pub mod vignette;

pub mod geo;
pub mod money;
pub mod validation;

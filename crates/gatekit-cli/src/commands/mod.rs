pub mod coverage;
pub mod extract;

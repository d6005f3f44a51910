pub mod quiz;
pub mod results;

pub mod quiz;
pub mod results;
pub mod welcome;

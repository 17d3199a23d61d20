pub mod answer;
pub mod field;
pub mod rule;
pub mod stats;

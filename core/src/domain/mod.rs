pub mod assessment;
pub mod common;
pub mod heuristics;
pub mod history;

pub mod analyze_assessment;
pub mod explain_assessment;

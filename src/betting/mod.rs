pub mod kelly;
pub mod odds;
pub mod value;
pub mod win_probability;

pub use value::{build_report, AnalysisInput};
pub use win_probability::{estimate_win_probability, ModelWeights};

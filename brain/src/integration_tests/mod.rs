pub use self::{helpers::run_strategy, scenario::TestScenario};

pub mod helpers;
pub mod scenario;

// package together all of the following and re-export
// in a partially flattened structure :
// : core component traits
// : tableau, pivot rules and elimination engines
// : solution extraction
// : user settings
// : main solver implementation

pub mod extract;
pub mod pivot_rules;
pub mod traits;

//partially flatten top level pieces

mod elimination;
mod settings;
mod solver;
mod tableau;
pub use elimination::*;
pub use pivot_rules::{PivotRule, PivotRules};
pub use settings::*;
pub use solver::*;
pub use tableau::*;

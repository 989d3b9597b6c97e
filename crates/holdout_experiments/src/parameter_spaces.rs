//! Pre-defined grids for the rule-induction model.

use crate::ParameterSpace;

/// Default rules (`maxD`), exceptions per rule (`maxE`) and literals per rule
/// body (`maxBody`): 12 configurations.
pub fn default_space() -> ParameterSpace {
    ParameterSpace::grid()
        .parameter("maxD", [4, 5])
        .parameter("maxE", [1, 2])
        .parameter("maxBody", [2, 3, 4])
}

/// Single-point grid for smoke runs.
pub fn minimal_space() -> ParameterSpace {
    ParameterSpace::grid()
        .parameter("maxD", [4])
        .parameter("maxE", [1])
        .parameter("maxBody", [2])
}

/// Wider body limits with at most one exception per rule.
pub fn compact_rules_space() -> ParameterSpace {
    ParameterSpace::grid()
        .parameter("maxD", [2, 3, 4])
        .parameter("maxE", [0, 1])
        .parameter("maxBody", [1, 2])
}

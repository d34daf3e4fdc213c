use crate::input::EstimatorInput;
use serde::{Deserialize, Serialize};

/// A named set of calculator answers, e.g. one household in a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub profile_id: String,
    pub name: String,
    #[serde(default)]
    pub input: EstimatorInput,
}

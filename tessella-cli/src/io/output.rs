use serde::{Deserialize, Serialize};

use tessella::generators::Pattern;

use crate::config::TessellaConfig;

/// Everything written to the json output of a run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PatternOutput {
    pub config: TessellaConfig,
    pub pattern: Pattern,
    pub n_shapes: usize,
    /// Time the pattern was generated (RFC 3339)
    pub generated_at: String,
    /// Seconds between the start of the process and the end of generation
    pub run_time_sec: f64,
}

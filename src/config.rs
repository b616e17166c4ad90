//! Configuration for preprocessing chains

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::preprocessing::mid_side::MidSideDirection;
use crate::preprocessing::reverse::DEFAULT_SUBDIVISION;

/// One transform in a preprocessing chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Crop leading and trailing silence
    Trim,
    /// Scale to unit peak amplitude
    Normalize,
    /// Mid/side encode or decode
    MidSide {
        /// Transform direction
        direction: MidSideDirection,
    },
    /// Reverse frame order within equal segments
    Reverse {
        /// Number of segments (default: 1, whole array)
        #[serde(default = "default_subdivision")]
        subdivision: usize,
    },
    /// Flip polarity
    Invert,
}

fn default_subdivision() -> usize {
    DEFAULT_SUBDIVISION
}

impl Step {
    /// Short name used in logs and result metadata
    pub fn name(&self) -> &'static str {
        match self {
            Step::Trim => "trim",
            Step::Normalize => "normalize",
            Step::MidSide {
                direction: MidSideDirection::Encode,
            } => "mid_side_encode",
            Step::MidSide {
                direction: MidSideDirection::Decode,
            } => "mid_side_decode",
            Step::Reverse { .. } => "reverse",
            Step::Invert => "invert",
        }
    }
}

/// Preprocessing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Transforms to apply, in order (default: trim, then normalize)
    pub steps: Vec<Step>,

    /// Fail with `DegenerateInput` on fully silent audio (default: false)
    ///
    /// When set, a trim step that leaves nothing, or a normalize step that
    /// finds a zero peak, aborts the chain instead of passing silence on.
    pub reject_silent: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            steps: vec![Step::Trim, Step::Normalize],
            reject_silent: false,
        }
    }
}

impl PreprocessConfig {
    /// Parse a configuration from JSON
    ///
    /// Missing fields take their default values.
    ///
    /// # Example
    ///
    /// ```
    /// use stratum_scope::config::{PreprocessConfig, Step};
    ///
    /// let config = PreprocessConfig::from_json(
    ///     r#"{ "steps": [{ "step": "trim" }, { "step": "reverse", "subdivision": 4 }] }"#,
    /// )?;
    /// assert_eq!(config.steps, vec![Step::Trim, Step::Reverse { subdivision: 4 }]);
    /// assert!(!config.reject_silent);
    /// # Ok::<(), stratum_scope::PreprocessError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAME_NUMBER_DIGITS;
use crate::error::{AutofocusError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Width of the zero-padded frame number before the file extension.
    pub frame_number_digits: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_number_digits: DEFAULT_FRAME_NUMBER_DIGITS,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.frame_number_digits == 0 {
            return Err(AutofocusError::InvalidArguments(
                "frame_number_digits must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::buffer::SampleBuffer;
use crate::error::ChartError;

/// Sample window length used by every reference sketch.
pub const DEFAULT_CAPACITY: usize = 100;

/// Construction-time chart settings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of samples kept per channel.
    pub capacity: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ChartConfig {
    /// Validates the settings by building the buffer they describe.
    pub fn build_buffer(&self) -> Result<SampleBuffer, ChartError> {
        SampleBuffer::new(self.capacity)
    }
}

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::ChartError;
use crate::frame::{parse_line, Frame};

/// Trait representing something that can yield decoded sample pairs on demand.
pub trait SampleSource {
    /// Returns the next frame, or `None` once the stream has ended.
    fn next_sample(&mut self) -> Result<Option<Frame>, ChartError>;
}

/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<Frame>,
}

impl ManualSource {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            queue: frames.into_iter().collect(),
        }
    }
}

impl SampleSource for ManualSource {
    fn next_sample(&mut self) -> Result<Option<Frame>, ChartError> {
        Ok(self.queue.pop_front())
    }
}

/// Decodes `WOG` lines from any buffered reader.
///
/// Malformed lines never reach the buffer: they are logged at debug level
/// and skipped, the way the device's occasional status chatter is meant to
/// be ignored.
pub struct LineSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> SampleSource for LineSource<R> {
    fn next_sample(&mut self) -> Result<Option<Frame>, ChartError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            match parse_line(&self.line) {
                Ok(frame) => return Ok(Some(frame)),
                Err(err) => log::debug!("dropping line {:?}: {err}", self.line.trim_end()),
            }
        }
    }
}

/// Endless sine pair with a little jitter; stands in for the device when no
/// hardware is attached.
pub struct SimulatedSource {
    phase: f64,
    amplitude: f64,
}

impl SimulatedSource {
    pub fn new(amplitude: f64) -> Self {
        Self {
            phase: 0.0,
            amplitude,
        }
    }
}

impl SampleSource for SimulatedSource {
    fn next_sample(&mut self) -> Result<Option<Frame>, ChartError> {
        self.phase += 0.1;
        let jitter = self.amplitude * 0.05;
        Ok(Some(Frame {
            x: self.amplitude * self.phase.sin() + (rand::random::<f64>() - 0.5) * jitter,
            y: self.amplitude * (self.phase * 0.7).cos() + (rand::random::<f64>() - 0.5) * jitter,
        }))
    }
}

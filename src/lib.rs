//! Core pipeline of a two-channel scrolling serial chart: a rolling sample
//! window, an autoscaling projection to canvas coordinates, and the decoder
//! for the tab-separated `WOG` line protocol. GUI toolkits and serial-port
//! handling live outside; they talk to this crate through [`SampleSource`]
//! on the way in and [`ProjectedFrame`] on the way out.

pub mod buffer;
pub mod config;
pub mod error;
pub mod frame;
pub mod project;
pub mod shared;
pub mod source;

pub use buffer::{ChannelSnapshot, SampleBuffer, SCALE_EPSILON};
pub use config::{ChartConfig, DEFAULT_CAPACITY};
pub use error::ChartError;
pub use frame::{parse_line, Frame, FRAME_TAG};
pub use project::{project, project_snapshot, ProjectedFrame};
pub use shared::{spawn_reader, SharedSampleBuffer};
pub use source::{LineSource, ManualSource, SampleSource, SimulatedSource};

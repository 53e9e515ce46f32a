use crate::error::ChartError;

/// Three-character marker that opens every valid sensor line.
pub const FRAME_TAG: &str = "WOG";

/// One decoded sample pair from the device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
}

/// Decodes one serial line of the form `WOG\t<x>\t<y>`.
///
/// Trailing CR/LF is stripped before the tag check. Fields past the third
/// are ignored; the device sometimes appends diagnostics there.
pub fn parse_line(line: &str) -> Result<Frame, ChartError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if !line.starts_with(FRAME_TAG) {
        return Err(ChartError::BadTag);
    }
    let mut fields = line.split('\t');
    fields.next(); // tag
    let x = numeric_field(fields.next(), 1)?;
    let y = numeric_field(fields.next(), 2)?;
    Ok(Frame { x, y })
}

fn numeric_field(field: Option<&str>, index: usize) -> Result<f64, ChartError> {
    let text = field.ok_or(ChartError::MissingField { index })?;
    text.trim().parse().map_err(|_| ChartError::BadNumber {
        index,
        text: text.to_string(),
    })
}

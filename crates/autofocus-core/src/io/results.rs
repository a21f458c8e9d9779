use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{AutofocusError, Result};
use crate::frame::FrameInfo;

/// Write frames as a tab-delimited table, one `number\tsharpness` line each.
///
/// The file is created or truncated. There is no header row. Sharpness uses
/// the shortest representation that parses back to the same `f64`.
///
/// Writes are not transactional: a failure part way leaves a partial file.
pub fn write_results(path: &Path, frames: &[FrameInfo]) -> Result<()> {
    let output_error = |source| AutofocusError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    write_table(&mut writer, frames).map_err(output_error)?;
    writer.flush().map_err(output_error)?;

    info!(output = %path.display(), rows = frames.len(), "Results written");
    Ok(())
}

/// Format frames into any writer using the result table layout.
pub fn write_table<W: Write>(writer: &mut W, frames: &[FrameInfo]) -> std::io::Result<()> {
    for frame in frames {
        writeln!(writer, "{}\t{}", frame.number, frame.sharpness)?;
    }
    Ok(())
}

//! Machine-readable command output.

use serde::Serialize;
use std::io::Write;

/// Write `value` as a single JSON line.
pub fn write_json_line(value: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
    let line = serde_json::to_string(value)?;
    writeln!(w, "{}", line)
}

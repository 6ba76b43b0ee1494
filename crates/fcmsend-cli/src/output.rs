//! Standard output rendering
//!
//! Stdout carries only the response body (or the dry-run payload); all
//! diagnostics go to stderr through `tracing`.

use fcmsend_core::types::OutgoingPayload;
use std::io::{self, Write};

/// Write the provider's response body, byte for byte, followed by exactly
/// one newline.
pub fn write_response<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Write the payload that would be posted, pretty-printed.
pub fn write_payload<W: Write>(out: &mut W, payload: &OutgoingPayload) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, payload)?;
    out.write_all(b"\n")?;
    out.flush()
}

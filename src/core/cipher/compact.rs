//! Armor compaction for Renovate.
//!
//! Renovate only accepts the bare Radix-64 body of a PGP message: one line,
//! no BEGIN/END markers, no CRC24 checksum line, no base64 padding. The
//! transform is line-aware so the checksum line is dropped at its line
//! boundary rather than by searching the whole block for a `=`.

/// Compact an armored PGP MESSAGE block into Renovate's single-line form.
///
/// Drops the marker lines, any armor headers and the blank separator, and
/// the `=XXXX` CRC24 checksum line, then joins the body lines and truncates
/// at the first `=` to shed base64 tail padding. The Radix-64 body alphabet
/// contains no `=`, so the truncation can only ever remove padding.
pub fn compact(armored: &str) -> String {
    let mut body = String::with_capacity(armored.len());
    let mut in_headers = true;

    for line in armored.lines() {
        let line = line.trim_end();
        if line.starts_with("-----") {
            continue;
        }
        if in_headers {
            // Armor headers (Version:, Comment:, ...) run until the first
            // blank line. Sequoia emits none by default, but tolerate them.
            if line.is_empty() {
                in_headers = false;
                continue;
            }
            if line.contains(": ") {
                continue;
            }
            in_headers = false;
        }
        if line.is_empty() || line.starts_with('=') {
            continue;
        }
        body.push_str(line);
    }

    if let Some(i) = body.find('=') {
        body.truncate(i);
    }
    body
}

//! Start-of-packet and start-of-message markers.
//!
//! A marker is the first run of `window` characters that are all
//! different. The answer is how many characters have been received when
//! the marker completes.

/// Window length of a start-of-packet marker.
pub const PACKET_WINDOW: usize = 4;
/// Window length of a start-of-message marker.
pub const MESSAGE_WINDOW: usize = 14;

/// Position just past the first marker of `window` distinct bytes.
///
/// Runs in one pass, tracking the last index each byte was seen at.
/// Returns `None` when the stream ends before a marker completes or the
/// window is empty.
#[must_use]
pub fn find_marker(stream: &[u8], window: usize) -> Option<usize> {
    if window == 0 {
        return None;
    }
    let mut last_seen = [None::<usize>; 256];
    // Start of the current run of distinct bytes.
    let mut start = 0;
    for (i, &b) in stream.iter().enumerate() {
        if let Some(prev) = last_seen[b as usize] {
            if prev >= start {
                start = prev + 1;
            }
        }
        last_seen[b as usize] = Some(i);
        if i + 1 - start == window {
            return Some(i + 1);
        }
    }
    None
}

/// Marker position for one input line, logging lines without one.
#[must_use]
pub fn marker_in_line(line: &str, window: usize) -> Option<usize> {
    let found = find_marker(line.trim_end().as_bytes(), window);
    if found.is_none() {
        log::warn!("no {window}-character marker in {} bytes", line.len());
    }
    found
}

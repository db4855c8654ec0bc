/// Width of a tab stop in space units.
pub const TAB_WIDTH: usize = 4;

/// Leading whitespace of a line, measured in tab stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndentInfo {
    /// Number of whole tab stops covered by the leading whitespace.
    pub depth: usize,
    /// Byte offset of the first character that is neither space nor tab.
    pub seek_pos: usize,
    /// Space units left over after the last whole tab stop.
    pub remain_space: usize,
}

/// Measures the leading space/tab run of `input`.
///
/// A tab always counts as a full stop of width; runs are summed without
/// snapping to the next stop, so `"   \t"` is 7 units (depth 1, remainder 3).
pub fn count_indent(input: &str) -> IndentInfo {
    let mut units = 0usize;
    let mut pos = 0usize;

    for b in input.bytes() {
        match b {
            b'\t' => units += TAB_WIDTH,
            b' ' => units += 1,
            _ => break,
        }
        pos += 1;
    }

    IndentInfo {
        depth: units / TAB_WIDTH,
        seek_pos: pos,
        remain_space: units % TAB_WIDTH,
    }
}

//! Call-stack capture for the `stack` context field
//!
//! A rendered `std::backtrace::Backtrace` is a list of frames. Each frame
//! starts with an index line (`   3: path::to::function`) followed by
//! optional `at file:line` and inlined-symbol lines. Stripping works on
//! whole frames, so the result does not depend on whether debuginfo is
//! present.

use std::backtrace::Backtrace;

/// Symbol prefixes of the frames that belong to the capture path itself
pub const INTERNAL_FRAMES: &[&str] = &[
    "seedlog_core::stack::capture",
    "seedlog_core::facade::LogFacade",
];

/// Capture the current call stack with internal frames removed
pub fn capture() -> String {
    let raw = Backtrace::force_capture().to_string();
    strip_internal_frames(&raw, INTERNAL_FRAMES)
}

fn is_frame_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.find(": ") {
        Some(pos) => pos > 0 && trimmed[..pos].bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Drop every frame up to and including the last one that mentions an
/// `internal` symbol, trim the leading whitespace of the first
/// remaining line, and rejoin with `\n` between lines
///
/// Without any internal frame the text is kept whole.
pub fn strip_internal_frames(raw: &str, internal: &[&str]) -> String {
    let mut frames: Vec<Vec<&str>> = Vec::new();
    for line in raw.lines() {
        match frames.last_mut() {
            Some(frame) if !is_frame_start(line) => frame.push(line),
            _ => frames.push(vec![line]),
        }
    }

    let is_internal = |frame: &Vec<&str>| {
        frame
            .iter()
            .any(|line| internal.iter().any(|symbol| line.contains(symbol)))
    };
    let keep_from = frames
        .iter()
        .rposition(is_internal)
        .map_or(0, |last| last + 1);

    let mut lines = frames[keep_from..].iter().flatten();
    let mut out = match lines.next() {
        Some(first) => first.trim_start().to_string(),
        None => return String::new(),
    };
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out
}

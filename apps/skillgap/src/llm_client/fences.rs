//! Locates the JSON payload in model output that may be wrapped in a markdown
//! code fence.
//!
//! Direct parse is attempted first. Only when that fails is the text scanned
//! for a fenced block. A fence that opens but never closes is an error; the
//! payload is never truncated to guess at its end.

use serde::de::IgnoredAny;
use thiserror::Error;

const BACKTICK: u8 = b'`';
const MIN_FENCE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenceError {
    #[error("code fence of {ticks} backticks opened on line {line} is never closed")]
    Unclosed { ticks: usize, line: usize },
}

/// Returns the slice of `raw` that should be handed to the JSON parser.
///
/// Text without any fence is returned trimmed so the parser can report the
/// real syntax error.
pub fn extract_json_payload(raw: &str) -> Result<&str, FenceError> {
    let trimmed = raw.trim();
    if serde_json::from_str::<IgnoredAny>(trimmed).is_ok() {
        return Ok(trimmed);
    }

    let mut line_start = 0;
    let mut lines = trimmed.split_inclusive('\n').enumerate();

    while let Some((index, line)) = lines.next() {
        let opening_start = line_start;
        line_start += line.len();

        let indent = line.len() - line.trim_start().len();
        let content = line.trim();
        let ticks = leading_backticks(content);
        if ticks < MIN_FENCE {
            continue;
        }

        // Info string is the word right after the ticks; the rest of the line is payload.
        let info_len = content[ticks..]
            .bytes()
            .take_while(u8::is_ascii_alphanumeric)
            .count();
        let body_start = opening_start + indent + ticks + info_len;

        if let Some(close) = trailing_close(&content[ticks + info_len..], ticks) {
            return Ok(trimmed[body_start..body_start + close].trim());
        }

        for (_, candidate) in lines.by_ref() {
            let candidate_start = line_start;
            line_start += candidate.len();

            if is_closing_fence(candidate.trim(), ticks) {
                return Ok(trimmed[body_start..candidate_start].trim());
            }
            if let Some(close) = trailing_close(candidate, ticks) {
                return Ok(trimmed[body_start..candidate_start + close].trim());
            }
        }

        return Err(FenceError::Unclosed {
            ticks,
            line: index + 1,
        });
    }

    Ok(trimmed)
}

fn leading_backticks(s: &str) -> usize {
    s.bytes().take_while(|b| *b == BACKTICK).count()
}

fn is_closing_fence(line: &str, ticks: usize) -> bool {
    line.len() >= ticks && line.bytes().all(|b| b == BACKTICK)
}

/// Offset of a closing run of at least `ticks` backticks that ends `text`
/// after some payload, as when the model closes the fence on the last array line.
fn trailing_close(text: &str, ticks: usize) -> Option<usize> {
    let text = text.trim_end();
    let run = text.bytes().rev().take_while(|b| *b == BACKTICK).count();
    (run >= ticks && run < text.len()).then(|| text.len() - run)
}

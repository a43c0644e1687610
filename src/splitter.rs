//! Buffer and drain routine shared by the blocking and async modes.

use crate::config::SplitConfig;
use tracing::{debug, trace};

const DELIMITER: char = ',';

/// A stateful comma splitter.
///
/// Feed fragments using [`push_str`](Self::push_str) and receive every item
/// completed by that fragment. Call [`finish`](Self::finish) once the input
/// is exhausted to flush the trailing item.
#[derive(Debug, Default)]
pub struct CommaSplitter {
    buf: String,
    skip_empty: bool,
}

impl CommaSplitter {
    /// Create a splitter that emits every item, empty ones included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a splitter honouring `config.skip_empty`.
    pub fn with_config(config: &SplitConfig) -> Self {
        Self {
            buf: String::new(),
            skip_empty: config.skip_empty,
        }
    }

    /// Append `fragment` and drain all complete items, left to right.
    ///
    /// Each returned item is the trimmed text before a comma. Text after the
    /// last comma stays buffered until more input or [`finish`](Self::finish).
    pub fn push_str(&mut self, fragment: &str) -> Vec<String> {
        // The buffer never holds a comma between calls, so only new text is scanned.
        let mut scan = self.buf.len();
        self.buf.push_str(fragment);

        let mut items = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.buf[scan..].find(DELIMITER) {
            let end = scan + offset;
            push_item(&mut items, &self.buf[start..end], self.skip_empty);
            start = end + DELIMITER.len_utf8();
            scan = start;
        }
        if start > 0 {
            self.buf.drain(..start);
        }
        items
    }

    /// Flush whatever remains as the final item.
    ///
    /// An empty remainder still yields `Some("")` unless empty items are
    /// skipped.
    pub fn finish(self) -> Option<String> {
        debug!(buffered = self.buf.len(), "flushing final item");
        let item = self.buf.trim();
        if self.skip_empty && item.is_empty() {
            None
        } else {
            Some(item.to_string())
        }
    }

    /// Text received but not yet emitted.
    pub fn buffered(&self) -> &str {
        &self.buf
    }
}

fn push_item(items: &mut Vec<String>, segment: &str, skip_empty: bool) {
    let item = segment.trim();
    if skip_empty && item.is_empty() {
        trace!("skipping empty item");
        return;
    }
    trace!(item, "item complete");
    items.push(item.to_string());
}

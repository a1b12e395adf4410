use std::fmt;

/// Payload size above which a tier label is shown at all.
const TIER_FLOOR_BYTES: usize = 1000;
/// Above this the payload is reported as large.
const LARGE_BYTES: usize = 100 * 1024;
/// Above this the payload is reported as very large.
const VERY_LARGE_BYTES: usize = 1024 * 1024;

/// Size and shape of a payload, derived from the raw text only.
///
/// Every field is a pure function of the input, recomputed on each call;
/// validity of the payload as JSON plays no part here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// UTF-8 encoded size. Multi-byte characters count 2 to 4 bytes each.
    pub byte_count: usize,
    /// Unicode scalar values, not bytes.
    pub char_count: usize,
    /// Segments produced by splitting on `\n`. Never 0: an empty payload
    /// still occupies one line.
    pub line_count: usize,
    /// Maximal runs of non-whitespace. Blank payloads have no words.
    pub word_count: usize,
}

/// Qualitative tier for the rendered report, keyed on the UTF-8 byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Optimal,
    Large,
    VeryLarge,
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeTier::Optimal => "optimal size",
            SizeTier::Large => "large payload",
            SizeTier::VeryLarge => "very large payload",
        })
    }
}

/// Measure a payload. Total and deterministic: any string, including the
/// empty one, yields a complete record.
pub fn measure(text: &str) -> Metrics {
    Metrics {
        byte_count: text.len(),
        char_count: text.chars().count(),
        // str::lines() would drop a trailing empty segment and report 0
        // for "", which is not how a text box counts lines.
        line_count: text.split('\n').count(),
        word_count: text.split_whitespace().count(),
    }
}

impl Metrics {
    pub fn kilobytes(&self) -> f64 {
        self.byte_count as f64 / 1024.0
    }

    pub fn megabytes(&self) -> f64 {
        self.byte_count as f64 / (1024.0 * 1024.0)
    }

    /// Tier label for the report, or `None` for payloads small enough that
    /// labeling them is noise.
    pub fn tier(&self) -> Option<SizeTier> {
        if self.byte_count > VERY_LARGE_BYTES {
            Some(SizeTier::VeryLarge)
        } else if self.byte_count > LARGE_BYTES {
            Some(SizeTier::Large)
        } else if self.byte_count > TIER_FLOOR_BYTES {
            Some(SizeTier::Optimal)
        } else {
            None
        }
    }
}

//! Boundary scoring and the segmentation engines
//!
//! A candidate boundary sits before the codepoint at index `i`, for every
//! `i` in `[1, len)`. Each candidate is scored by summing the weights of
//! the 13 n-gram lookups around it and accepted when the model bias plus
//! the raw score is positive. Both the eager and the streaming paths run
//! on the same sliding-window scorer, so they always agree.

use crate::decode::{self, Decoded};
use crate::error::{DecodeResult, ModelResult};
use crate::model::Model;
use crate::window::ScoreWindow;
use std::iter::Fuse;

/// Sum the weights of every table lookup whose window slots are occupied.
///
/// Table/offset pairing, with slot `k` holding the codepoint at `i-3+k`:
/// `uni[j]` reads slot `j`, `bi[j]` reads slots `j+1..j+3`, `tri[j]` reads
/// slots `j..j+3`. An absent key contributes nothing.
fn score(model: &Model, window: &ScoreWindow) -> i32 {
    let s = window.slots();
    let mut total = 0i32;
    for (table, k) in model.uni.iter().zip(0..) {
        if let Some(a) = s[k] {
            total += table.get([a]).unwrap_or(0);
        }
    }
    for (table, k) in model.bi.iter().zip(1..) {
        if let (Some(a), Some(b)) = (s[k], s[k + 1]) {
            total += table.get([a, b]).unwrap_or(0);
        }
    }
    for (table, k) in model.tri.iter().zip(0..) {
        if let (Some(a), Some(b), Some(c)) = (s[k], s[k + 1], s[k + 2]) {
            total += table.get([a, b, c]).unwrap_or(0);
        }
    }
    total
}

/// Lazy iterator over accepted boundary positions
///
/// Pulls codepoints from the underlying iterator on demand and keeps only
/// the bounded scoring window, so arbitrarily long inputs segment in
/// constant memory. Dropping the iterator (or just not polling it again)
/// stops all further pulls, which is the cancellation mechanism of
/// [`Segmenter::segment_streaming`].
///
/// End of input is the underlying iterator returning `None`; there is no
/// reserved sentinel codepoint, and embedded `'\0'` characters are
/// ordinary input.
#[derive(Debug)]
pub struct Boundaries<'m, I: Iterator<Item = char>> {
    model: &'m Model,
    chars: Fuse<I>,
    window: ScoreWindow,
    candidate: usize,
    primed: bool,
    advance_pending: bool,
}

impl<'m, I: Iterator<Item = char>> Boundaries<'m, I> {
    fn new(model: &'m Model, chars: I) -> Self {
        Self {
            model,
            chars: chars.fuse(),
            window: ScoreWindow::new(),
            candidate: 0,
            primed: false,
            advance_pending: false,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Boundaries<'_, I> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.primed {
            self.primed = true;
            // Center the window on candidate 1: pull codepoints 0..=3
            for _ in 0..4 {
                let ch = self.chars.next();
                self.window.shift(ch);
            }
            self.candidate = 1;
        }
        loop {
            if self.advance_pending {
                self.advance_pending = false;
                let ch = self.chars.next();
                self.window.shift(ch);
                self.candidate += 1;
            }
            // No codepoint at the candidate index means end of input
            self.window.current()?;
            let index = self.candidate;
            self.advance_pending = true;
            if self.model.bias() + f64::from(score(self.model, &self.window)) > 0.0 {
                return Some(index);
            }
        }
    }
}

/// Segments text into phrase-sized chunks with a loaded [`Model`]
///
/// All methods are read-only; one segmenter can serve many threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    model: Model,
}

impl Segmenter {
    /// Wrap an already loaded model
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Load a model from its JSON description and wrap it
    pub fn from_json(bytes: &[u8]) -> ModelResult<Self> {
        Ok(Self::new(Model::from_json(bytes)?))
    }

    /// The underlying model
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Accepted boundary positions over a codepoint sequence, ascending
    /// and duplicate-free; every position is in `(0, codepoints.len())`.
    pub fn boundaries(&self, codepoints: &[char]) -> Vec<usize> {
        self.stream(codepoints.iter().copied()).collect()
    }

    /// Segment UTF-8 bytes, returning boundary positions as byte offsets.
    pub fn segment_utf8(&self, bytes: &[u8]) -> DecodeResult<Vec<usize>> {
        let decoded = decode::decode_utf8(bytes)?;
        Ok(self.translate(&decoded))
    }

    /// Segment UTF-16 code units, returning boundary positions as
    /// code-unit offsets.
    pub fn segment_utf16(&self, units: &[u16]) -> DecodeResult<Vec<usize>> {
        let decoded = decode::decode_utf16(units)?;
        Ok(self.translate(&decoded))
    }

    fn translate(&self, decoded: &Decoded) -> Vec<usize> {
        self.boundaries(&decoded.codepoints)
            .into_iter()
            .map(|index| decoded.offsets[index])
            .collect()
    }

    /// Split a string into its accepted segments.
    ///
    /// Convenience over [`Segmenter::segment_utf8`]; the returned slices
    /// cover the whole input in order. An empty input yields no segments.
    pub fn segment_str<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.is_empty() {
            return Vec::new();
        }
        let decoded = Decoded {
            codepoints: text.chars().collect(),
            offsets: text.char_indices().map(|(offset, _)| offset).collect(),
        };
        let mut segments = Vec::new();
        let mut start = 0;
        for offset in self.translate(&decoded) {
            segments.push(&text[start..offset]);
            start = offset;
        }
        segments.push(&text[start..]);
        segments
    }

    /// Stream boundary positions from a codepoint source.
    ///
    /// This is the single-pass, constant-memory engine: codepoints are
    /// pulled on demand and never materialized as a whole.
    pub fn stream<I>(&self, chars: I) -> Boundaries<'_, I::IntoIter>
    where
        I: IntoIterator<Item = char>,
    {
        Boundaries::new(&self.model, chars.into_iter())
    }

    /// Stream boundaries into a callback.
    ///
    /// `on_boundary` receives each accepted position in ascending order;
    /// returning `false` cancels the run immediately: no further
    /// codepoints are pulled and boundaries already reported stand.
    pub fn segment_streaming<I, F>(&self, chars: I, mut on_boundary: F)
    where
        I: IntoIterator<Item = char>,
        F: FnMut(usize) -> bool,
    {
        for boundary in self.stream(chars) {
            if !on_boundary(boundary) {
                return;
            }
        }
    }
}

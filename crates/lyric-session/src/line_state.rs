use std::collections::VecDeque;

use lyric_core::voicing::{compose, normalize_mark};
use lyric_core::Chunk;

/// Text already accepted on this line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confirmed {
    pub kana: String,
    pub romaji: String,
}

/// Progress through one compiled line.
///
/// `current` is `None` once every chunk has been typed. While a chunk is in
/// progress its `patterns` hold only the unconsumed suffixes of spellings that
/// still agree with what was typed (romaji mode), and its `kana` holds only the
/// characters not yet entered (kana mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    pub(crate) confirmed: Confirmed,
    pub(crate) current: Option<Chunk>,
    /// Keys typed against `current` in romaji mode.
    pub(crate) current_typed: String,
    pub(crate) queue: VecDeque<Chunk>,
    /// The last completed chunk was ん typed as a single "n".
    pub(crate) nasal_tail: bool,
    /// Voicing mark typed ahead of its base kana.
    pub(crate) pending_mark: Option<char>,
}

impl LineState {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        let mut queue = VecDeque::from(chunks);
        let current = queue.pop_front();
        Self {
            confirmed: Confirmed::default(),
            current,
            current_typed: String::new(),
            queue,
            nasal_tail: false,
            pending_mark: None,
        }
    }

    /// A line with nothing to type; already completed.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn confirmed(&self) -> &Confirmed {
        &self.confirmed
    }

    pub fn confirmed_kana(&self) -> &str {
        &self.confirmed.kana
    }

    pub fn confirmed_romaji(&self) -> &str {
        &self.confirmed.romaji
    }

    pub fn current(&self) -> Option<&Chunk> {
        self.current.as_ref()
    }

    pub fn current_kana(&self) -> &str {
        self.current.as_ref().map_or("", |c| c.kana.as_str())
    }

    pub fn current_typed(&self) -> &str {
        &self.current_typed
    }

    pub fn queue(&self) -> &VecDeque<Chunk> {
        &self.queue
    }

    pub fn pending_mark(&self) -> Option<char> {
        self.pending_mark
    }

    pub fn is_completed(&self) -> bool {
        self.current.is_none()
    }

    /// Kana not yet entered: the current chunk's remainder plus the queue.
    pub fn remaining_kana(&self) -> String {
        let mut out = self.current_kana().to_string();
        for chunk in &self.queue {
            out.push_str(&chunk.kana);
        }
        out
    }

    /// Canonical keystrokes left to finish the line.
    pub fn remaining_romaji(&self) -> String {
        let mut out = self
            .current
            .as_ref()
            .map_or(String::new(), |c| c.canonical().to_string());
        for chunk in &self.queue {
            out.push_str(chunk.canonical());
        }
        out
    }

    /// Append entered kana. A leading voicing mark voices the last confirmed
    /// kana instead of standing on its own.
    pub(crate) fn confirm_kana(&mut self, text: &str) {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return;
        };
        let voiced = normalize_mark(first).and_then(|mark| {
            self.confirmed
                .kana
                .chars()
                .last()
                .and_then(|base| compose(base, mark))
        });
        match voiced {
            Some(v) => {
                self.confirmed.kana.pop();
                self.confirmed.kana.push(v);
            }
            None => self.confirmed.kana.push(first),
        }
        self.confirmed.kana.push_str(chars.as_str());
    }

    /// Move to the next queued chunk, dropping per-chunk progress.
    pub(crate) fn advance(&mut self) {
        self.current = self.queue.pop_front();
        self.current_typed.clear();
        self.pending_mark = None;
        self.nasal_tail = false;
    }
}

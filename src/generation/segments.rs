//! Segment model for flag-gated text documents
//!
//! A [`Document`] is a fixed, ordered list of [`Segment`]s. Literal segments are
//! always emitted; conditional segments are emitted only when their [`Gate`]
//! holds for the supplied [`OptionSet`]. Inside an emitted body, a
//! [`Piece::Token`] can append text to a line without deciding whether the
//! line itself appears.

use crate::generation::{OptionName, OptionSet};

/// Predicate deciding whether a segment or token is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// The option is switched on
    On(OptionName),
    /// The option is switched off
    Off(OptionName),
    /// Both options are switched on
    Both(OptionName, OptionName),
}

impl Gate {
    pub fn holds(&self, options: &OptionSet) -> bool {
        match *self {
            Gate::Always => true,
            Gate::On(name) => options.is_enabled(name),
            Gate::Off(name) => !options.is_enabled(name),
            Gate::Both(a, b) => options.is_enabled(a) && options.is_enabled(b),
        }
    }
}

/// Part of a conditional body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Text(&'static str),
    /// Inline substitution; `text` carries its own leading separator
    Token { gate: Gate, text: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Conditional {
        gate: Gate,
        body: &'static [Piece],
    },
}

/// Immutable, statically defined document
#[derive(Debug, Clone, Copy)]
pub struct Document {
    segments: &'static [Segment],
}

impl Document {
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Render the document for `options`.
    ///
    /// Pure and deterministic: the same option set always yields the same
    /// bytes, in document order.
    pub fn render(&self, options: &OptionSet) -> String {
        let mut out = String::new();
        for segment in self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Conditional { gate, body } => {
                    if !gate.holds(options) {
                        continue;
                    }
                    for piece in body.iter() {
                        match piece {
                            Piece::Text(text) => out.push_str(text),
                            Piece::Token { gate, text } => {
                                if gate.holds(options) {
                                    out.push_str(text);
                                }
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

/// Names declared on `.PHONY:` lines of a rendered Makefile, in order
pub fn phony_targets(rendered: &str) -> Vec<&str> {
    rendered
        .lines()
        .filter_map(|line| line.strip_prefix(".PHONY:"))
        .map(str::trim)
        .collect()
}

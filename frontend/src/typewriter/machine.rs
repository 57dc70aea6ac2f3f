//! Character-by-character reveal of a fixed string.
//!
//! Lengths count `char`s, so every prefix handed out is valid UTF-8.

/// Glyph appended while the reveal is still running.
pub const CURSOR: char = '|';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Revealing,
    Complete,
}

/// What the component puts on screen for one step of the reveal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealFrame {
    pub text: String,
    pub cursor: bool,
}

#[cfg(test)]
impl RevealFrame {
    /// Text with the cursor glyph attached, as a single string.
    pub fn rendered(&self) -> String {
        let mut out = self.text.clone();
        if self.cursor {
            out.push(CURSOR);
        }
        out
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    source: String,
    // Byte offset of each char boundary after the first, plus the end.
    boundaries: Vec<usize>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let boundaries = source
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Typewriter {
            source,
            boundaries,
            revealed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn phase(&self) -> RevealPhase {
        if self.revealed < self.len() {
            RevealPhase::Revealing
        } else {
            RevealPhase::Complete
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RevealPhase::Complete
    }

    /// Reveals one more character. A no-op once complete.
    pub fn tick(&mut self) -> RevealPhase {
        if self.revealed < self.len() {
            self.revealed += 1;
        }
        self.phase()
    }

    pub fn displayed(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.source[..self.boundaries[n - 1]],
        }
    }

    pub fn show_cursor(&self) -> bool {
        !self.is_complete()
    }

    pub fn frame(&self) -> RevealFrame {
        RevealFrame {
            text: self.displayed().to_string(),
            cursor: self.show_cursor(),
        }
    }
}

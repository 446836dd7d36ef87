//! Console stand-in for the host's text-to-speech.

use howthings_skill::{NarrationLine, SkillError, Speaker};
use std::io::Write;

/// Writes each line to `out`; lines that ask to wait are flushed first.
pub struct ConsoleSpeaker<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn speak(&mut self, line: &NarrationLine) -> howthings_skill::Result<()> {
        writeln!(self.out, "{}", line.text).map_err(|e| SkillError::Speech(e.to_string()))?;
        if line.wait {
            self.out.flush().map_err(|e| SkillError::Speech(e.to_string()))?;
        }
        Ok(())
    }
}

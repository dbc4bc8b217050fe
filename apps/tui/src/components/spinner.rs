//! Spinner shown while an orchestration request is in flight.

/// Predefined spinner frame sequences.
pub struct SpinnerFrames;

impl SpinnerFrames {
    /// Braille spinner frames (default, smooth animation)
    pub const BRAILLE: &'static [&'static str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

    /// Circle spinner frames, for terminals where braille renders poorly
    pub const CIRCLE: &'static [&'static str] = &["◐", "◓", "◑", "◒"];
}

/// Spinner animation handler.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    frames: &'static [&'static str],
    animated: bool,
}

impl Spinner {
    pub fn new() -> Self {
        Self { frames: SpinnerFrames::BRAILLE, animated: true }
    }

    pub fn with_frames(frames: &'static [&'static str]) -> Self {
        Self { frames, animated: true }
    }

    /// A spinner that always shows its first frame.
    #[must_use]
    pub fn still(mut self) -> Self {
        self.animated = false;
        self
    }

    /// Frame for the given tick counter.
    pub fn frame(&self, tick: usize) -> &'static str {
        match self.frames {
            [] => "",
            frames if !self.animated => frames[0],
            frames => frames[tick % frames.len()],
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frame_cycling() {
        let spinner = Spinner::new();
        for i in 0..25 {
            assert_eq!(spinner.frame(i), SpinnerFrames::BRAILLE[i % SpinnerFrames::BRAILLE.len()]);
        }
    }

    #[test]
    fn test_still_spinner() {
        let spinner = Spinner::with_frames(SpinnerFrames::CIRCLE).still();
        assert_eq!(spinner.frame(3), "◐");
    }

    #[test]
    fn test_empty_frames() {
        assert_eq!(Spinner::with_frames(&[]).frame(7), "");
    }
}

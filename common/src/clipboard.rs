/// How long a "Copied" highlight stays on screen.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

/// Which copy button is currently showing "Copied".
///
/// A copy marks its target; the reset timer started by each copy always fires
/// and clears whatever is marked at that moment, even if a later copy moved
/// the highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: Option<String>,
}

impl CopyFeedback {
    pub fn mark(&mut self, target: impl Into<String>) {
        self.copied = Some(target.into());
    }

    pub fn clear(&mut self) {
        self.copied = None;
    }

    pub fn is_copied(&self, target: &str) -> bool {
        self.copied.as_deref() == Some(target)
    }

    pub fn current(&self) -> Option<&str> {
        self.copied.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_copy_moves_highlight() {
        let mut fb = CopyFeedback::default();
        fb.mark("jani");
        fb.mark("radit");
        assert!(!fb.is_copied("jani"));
        assert!(fb.is_copied("radit"));
    }

    #[test]
    fn first_reset_clears_later_copy() {
        let mut fb = CopyFeedback::default();
        fb.mark("jani");
        fb.mark("radit");
        // Timer from the first copy fires.
        fb.clear();
        assert_eq!(fb.current(), None);
    }
}

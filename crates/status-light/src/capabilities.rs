//! Panel capability system
//!
//! Views declare what kind of input they accept. The keyboard middleware
//! routes keys by capability instead of by concrete view type.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a panel can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Panel owns a text input field; printable keys go to it
        const TEXT_INPUT = 1 << 0;

        /// Panel can scroll vertically
        const SCROLL_VERTICAL = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_vertical_scroll(self) -> bool {
        self.contains(Self::SCROLL_VERTICAL)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_capabilities() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_vertical_scroll());
    }

    #[test]
    fn test_capabilities_are_independent() {
        let caps = PanelCapabilities::SCROLL_VERTICAL;
        assert!(caps.supports_vertical_scroll());
        assert!(!caps.accepts_text_input());
    }
}

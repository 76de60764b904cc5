//! Presentation properties of a clock. None of these affect the clock's motion.

/// Colour and label a host uses to draw a clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    /// RGBA, each channel in [0, 1].
    pub color: [f32; 4],
    /// Optional caption drawn next to the clock.
    pub label: Option<String>,
}

impl ClockStyle {
    pub const YELLOW: [f32; 4] = [1.0, 0.87, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.35, 0.6, 1.0, 1.0];
    pub const RED: [f32; 4] = [0.99, 0.38, 0.33, 1.0];

    /// Creates a new style. Channels are clamped into [0, 1].
    pub fn new(color: [f32; 4], label: Option<String>) -> Self {
        ClockStyle {
            color: color.map(|c| c.clamp(0.0, 1.0)),
            label,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for ClockStyle {
    /// Yellow photon, no caption.
    fn default() -> Self {
        ClockStyle {
            color: Self::YELLOW,
            label: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_clamps_channels() {
        let style = ClockStyle::new([1.5, -0.2, 0.5, 1.0], None);
        assert_eq!(style.color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_style_with_label() {
        let style = ClockStyle::default().with_label("Rest frame");
        assert_eq!(style.color, ClockStyle::YELLOW);
        assert_eq!(style.label.as_deref(), Some("Rest frame"));
    }
}

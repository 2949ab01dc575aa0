/// Row counts offered by the preview selector
pub const PREVIEW_OPTIONS: [usize; 4] = [10, 25, 50, 200];

/// The preview never renders more rows than this
pub const PREVIEW_CAP: usize = 200;

/// How many parsed rows the imports page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewWindow {
    pub shown: usize,
    pub total: usize,
    /// File has more rows than the preview can ever show
    pub capped: bool,
}

impl PreviewWindow {
    pub fn new(total: usize, requested: usize) -> Self {
        Self {
            shown: requested.min(PREVIEW_CAP).min(total),
            total,
            capped: total > PREVIEW_CAP,
        }
    }

    /// Option is selectable only when the file has at least that many rows
    pub fn option_enabled(total: usize, option: usize) -> bool {
        total >= option
    }

    pub fn caption(&self) -> String {
        let mut caption = format!("Showing {} of {} rows", self.shown, self.total);
        if self.capped {
            caption.push_str(" (Preview capped at 200 rows)");
        }
        caption
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window() {
        assert_eq!(PreviewWindow::new(3, 10).shown, 3);
        assert_eq!(PreviewWindow::new(30, 25).shown, 25);
        assert_eq!(PreviewWindow::new(500, 200).shown, 200);
        assert_eq!(PreviewWindow::new(500, 1000).shown, 200);
        assert_eq!(PreviewWindow::new(0, 10).shown, 0);
    }

    #[test]
    fn test_caption() {
        assert_eq!(PreviewWindow::new(12, 10).caption(), "Showing 10 of 12 rows");
        assert_eq!(
            PreviewWindow::new(201, 50).caption(),
            "Showing 50 of 201 rows (Preview capped at 200 rows)"
        );
    }

    #[test]
    fn test_options() {
        assert!(PreviewWindow::option_enabled(25, 25));
        assert!(!PreviewWindow::option_enabled(24, 25));
    }
}

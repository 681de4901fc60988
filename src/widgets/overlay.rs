// ABOUTME: Dismissible overlay shared by dropdowns, time pickers and file prompts
// Open/closed state plus a dismiss region registered while the overlay is drawn

use ratatui::layout::Rect;

/// Open/closed state with a click-outside dismiss trigger.
///
/// The dismiss region is registered by the renderer each time the overlay is drawn and
/// is torn down whenever the overlay closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissibleOverlay {
    open: bool,
    dismiss_region: Option<Rect>,
}

impl DismissibleOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.dismiss_region = None;
    }

    /// Record where the overlay (anchor plus popup) was drawn. Ignored while closed.
    pub fn register_region(&mut self, region: Rect) {
        if self.open {
            self.dismiss_region = Some(region);
        }
    }

    pub fn dismiss_region(&self) -> Option<Rect> {
        self.dismiss_region
    }

    /// Handle a mouse press. Returns true if the press dismissed the overlay.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        if !self.open {
            return false;
        }
        let inside = self
            .dismiss_region
            .is_some_and(|r| r.contains_point(column, row));
        if inside {
            return false;
        }
        self.close();
        true
    }
}

/// Point containment for terminal cells
trait ContainsPoint {
    fn contains_point(&self, column: u16, row: u16) -> bool;
}

impl ContainsPoint for Rect {
    fn contains_point(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_outside_closes() {
        let mut overlay = DismissibleOverlay::new();
        overlay.open();
        overlay.register_region(Rect::new(10, 5, 20, 8));

        assert!(!overlay.handle_click(12, 6));
        assert!(overlay.is_open());

        assert!(overlay.handle_click(0, 0));
        assert!(!overlay.is_open());
        assert_eq!(overlay.dismiss_region(), None);
    }

    #[test]
    fn test_region_not_registered_while_closed() {
        let mut overlay = DismissibleOverlay::new();
        overlay.register_region(Rect::new(0, 0, 5, 5));
        assert_eq!(overlay.dismiss_region(), None);
        assert!(!overlay.handle_click(1, 1));
    }

    #[test]
    fn test_open_without_region_closes_on_any_click() {
        let mut overlay = DismissibleOverlay::new();
        overlay.open();
        assert!(overlay.is_open());
        assert!(overlay.handle_click(3, 3));
    }

    #[test]
    fn test_edge_cells() {
        let rect = Rect::new(2, 2, 3, 3);
        assert!(rect.contains_point(2, 2));
        assert!(rect.contains_point(4, 4));
        assert!(!rect.contains_point(5, 4));
        assert!(!rect.contains_point(4, 5));
    }
}

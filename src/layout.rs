/// Where a frame goes on screen, given the terminal and content sizes.
///
/// All vertical arithmetic is done in pixel rows (two per terminal row). The
/// parity of the top margin decides whether the encoder has to shift the
/// picture down by half a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportLayout {
    pub offset_x: u16,
    pub offset_y: u16,
    /// Terminal rows available to the image.
    pub drawable_height: u16,
    /// Top margin in pixel rows is odd; encode with a half-row offset.
    pub offset_mode: bool,
}

/// Rows the image may use once the status bar has taken its line.
pub fn drawable_height(terminal_height: u16, status_bar: bool) -> u16 {
    if status_bar {
        terminal_height.saturating_sub(1)
    } else {
        terminal_height
    }
}

/// Pixel bounding box for the scaler: one pixel per column, two per row.
pub fn bounding_box(terminal_width: u16, terminal_height: u16, status_bar: bool) -> (u32, u32) {
    (
        terminal_width as u32,
        2 * drawable_height(terminal_height, status_bar) as u32,
    )
}

impl ViewportLayout {
    pub fn compute(
        terminal_width: u16,
        terminal_height: u16,
        content_width: u32,
        content_pixel_height: u32,
        status_bar: bool,
    ) -> Self {
        let drawable_height = drawable_height(terminal_height, status_bar);

        let spare_columns = (terminal_width as u32).saturating_sub(content_width);
        let spare_pixels = (2 * drawable_height as u32).saturating_sub(content_pixel_height);

        // Ideal top margin is spare_pixels / 2 pixel rows
        let top_margin = spare_pixels / 2;

        Self {
            offset_x: (spare_columns / 2) as u16,
            offset_y: (spare_pixels / 4) as u16,
            drawable_height,
            offset_mode: top_margin % 2 == 1,
        }
    }

    pub fn origin(&self) -> (u16, u16) {
        (self.offset_x, self.offset_y)
    }
}

/// Build the status bar text for the image at `index` (zero based).
///
/// Shows the displayed size, and how much of the original area it covers
/// when the image had to be shrunk in both directions.
pub fn status_text(
    index: usize,
    count: usize,
    name: &str,
    scaled: (u32, u32),
    original: (u32, u32),
) -> String {
    let (width, height) = scaled;
    let (original_width, original_height) = original;

    let mut status = format!("({}/{count}) {name} | {width}x{height}", index + 1);
    if width < original_width && height < original_height {
        let scaled_area = width as f64 * height as f64;
        let original_area = original_width as f64 * original_height as f64;
        let percent = scaled_area / original_area * 100.0;
        status.push_str(&format!(
            " ({percent:.1}% of {original_width}x{original_height})"
        ));
    }
    status
}

/// Cut `text` to at most `width` characters.
pub fn truncate_to_width(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}

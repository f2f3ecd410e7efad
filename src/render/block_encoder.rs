//! Half-block encoding.
//! Uses the unicode character `▀` combined with foreground and background color so a single
//! terminal cell shows two stacked pixels. Assumes that the font aspect ratio is roughly 1:2.
//! Colors are always emitted as 24-bit RGB.
use crossterm::{
    Command,
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use image::{Rgb, RgbImage};
use std::fmt;
use std::io::{self, Write};

pub const UPPER_HALF_BLOCK: char = '▀';
pub const LOWER_HALF_BLOCK: char = '▄';

/// One terminal cell.
///
/// `bg` is `None` when the cell only carries a single pixel row, leaving the
/// other half of the cell in the terminal's default background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub symbol: char,
    pub fg: Rgb<u8>,
    pub bg: Option<Rgb<u8>>,
}

impl Glyph {
    fn pair(top: Rgb<u8>, bottom: Rgb<u8>) -> Self {
        Self {
            symbol: UPPER_HALF_BLOCK,
            fg: top,
            bg: Some(bottom),
        }
    }

    fn upper(top: Rgb<u8>) -> Self {
        Self {
            symbol: UPPER_HALF_BLOCK,
            fg: top,
            bg: None,
        }
    }

    fn lower(bottom: Rgb<u8>) -> Self {
        Self {
            symbol: LOWER_HALF_BLOCK,
            fg: bottom,
            bg: None,
        }
    }
}

fn term_color(color: Rgb<u8>) -> Color {
    let [r, g, b] = color.0;
    Color::Rgb { r, g, b }
}

/// A run of glyphs starting at screen cell (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLine {
    pub x: u16,
    pub y: u16,
    pub glyphs: Vec<Glyph>,
}

impl GlyphLine {
    /// Queue the cursor move and the styled glyphs. Nothing is flushed.
    pub fn queue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, MoveTo(self.x, self.y), Print(self))
    }
}

/// Writes the glyphs with their color escapes, followed by an attribute reset.
impl fmt::Display for GlyphLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            SetForegroundColor(term_color(glyph.fg)).write_ansi(f)?;
            if let Some(bg) = glyph.bg {
                SetBackgroundColor(term_color(bg)).write_ansi(f)?;
            }
            write!(f, "{}", glyph.symbol)?;
        }
        SetAttribute(Attribute::Reset).write_ansi(f)
    }
}

/// The encoded form of one scaled image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Pixel width of the encoded canvas.
    pub width: u32,
    /// Pixel height of the encoded canvas.
    pub height: u32,
    /// Whether the frame starts with a lone lower-half row.
    pub offset: bool,
    pub lines: Vec<GlyphLine>,
}

impl RenderedFrame {
    pub fn queue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            line.queue(out)?;
        }
        Ok(())
    }
}

/// Encode a composited canvas into glyph lines placed from `origin` downwards.
///
/// Without `offset`, pixel rows are paired (0,1), (2,3), ... With `offset`,
/// row 0 is drawn alone in the lower half of its cell and pairing continues
/// with (1,2), (3,4), ..., which moves the picture down by half a cell.
/// A trailing unpaired row is drawn as `▀` with no background.
pub fn encode(canvas: &RgbImage, origin: (u16, u16), offset: bool) -> RenderedFrame {
    let (width, height) = canvas.dimensions();
    let mut frame = RenderedFrame {
        width,
        height,
        offset,
        lines: Vec::new(),
    };
    if width == 0 || height == 0 {
        return frame;
    }

    let (origin_x, origin_y) = origin;
    let mut push_line = |glyphs: Vec<Glyph>| {
        let y = origin_y.saturating_add(frame.lines.len() as u16);
        frame.lines.push(GlyphLine {
            x: origin_x,
            y,
            glyphs,
        });
    };

    let mut row = 0;
    if offset {
        push_line((0..width).map(|x| Glyph::lower(*canvas.get_pixel(x, 0))).collect());
        row = 1;
    }

    while row < height {
        let glyphs = (0..width)
            .map(|x| {
                let top = *canvas.get_pixel(x, row);
                if row + 1 < height {
                    Glyph::pair(top, *canvas.get_pixel(x, row + 1))
                } else {
                    Glyph::upper(top)
                }
            })
            .collect();
        push_line(glyphs);
        row += 2;
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn striped(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |_, y| Rgb([y as u8, y as u8, y as u8]))
    }

    #[test]
    fn test_line_counts() {
        for height in 0..10u32 {
            let canvas = striped(3, height);
            let plain = encode(&canvas, (0, 0), false);
            assert_eq!(plain.lines.len() as u32, height.div_ceil(2), "h={height}");

            let shifted = encode(&canvas, (0, 0), true);
            let expected = if height == 0 {
                0
            } else {
                (height - 1).div_ceil(2) + 1
            };
            assert_eq!(shifted.lines.len() as u32, expected, "h={height}");
        }
    }

    #[test]
    fn test_zero_width_is_empty() {
        let frame = encode(&RgbImage::new(0, 6), (0, 0), true);
        assert!(frame.lines.is_empty());
    }

    #[test]
    fn test_solid_red_square() {
        let canvas = RgbImage::from_pixel(4, 4, RED);
        let frame = encode(&canvas, (0, 0), false);
        assert_eq!(frame.lines.len(), 2);
        for line in &frame.lines {
            assert_eq!(line.glyphs.len(), 4);
            assert!(line.glyphs.iter().all(|g| *g == Glyph::pair(RED, RED)));
        }
    }

    #[test]
    fn test_top_black_bottom_white() {
        let canvas = RgbImage::from_fn(8, 2, |_, y| if y == 0 { BLACK } else { WHITE });
        let frame = encode(&canvas, (0, 0), false);
        assert_eq!(frame.lines.len(), 1);
        let line = &frame.lines[0];
        assert_eq!(line.glyphs.len(), 8);
        for glyph in &line.glyphs {
            assert_eq!(glyph.symbol, UPPER_HALF_BLOCK);
            assert_eq!(glyph.fg, BLACK);
            assert_eq!(glyph.bg, Some(WHITE));
        }
    }

    #[test]
    fn test_leftover_row_has_no_background() {
        let canvas = striped(2, 3);
        let frame = encode(&canvas, (0, 0), false);
        let last = frame.lines.last().unwrap();
        assert_eq!(last.glyphs[0], Glyph::upper(Rgb([2, 2, 2])));
        assert_eq!(last.glyphs[0].bg, None);
    }

    #[test]
    fn test_offset_mode_leads_with_lower_half() {
        let canvas = striped(2, 4);
        let frame = encode(&canvas, (0, 0), true);
        assert!(frame.offset);
        assert_eq!(frame.lines.len(), 3);

        assert_eq!(frame.lines[0].glyphs[0], Glyph::lower(Rgb([0, 0, 0])));
        assert_eq!(
            frame.lines[1].glyphs[0],
            Glyph::pair(Rgb([1, 1, 1]), Rgb([2, 2, 2]))
        );
        assert_eq!(frame.lines[2].glyphs[0], Glyph::upper(Rgb([3, 3, 3])));
    }

    #[test]
    fn test_lines_are_placed_from_origin() {
        let frame = encode(&striped(5, 6), (7, 2), true);
        let positions: Vec<_> = frame.lines.iter().map(|l| (l.x, l.y)).collect();
        assert_eq!(positions, vec![(7, 2), (7, 3), (7, 4), (7, 5)]);
    }

    #[test]
    fn test_display_emits_truecolor_escapes() {
        let canvas = RgbImage::from_fn(1, 2, |_, y| if y == 0 { BLACK } else { WHITE });
        let text = encode(&canvas, (0, 0), false).lines[0].to_string();
        assert_eq!(text, "\x1b[38;2;0;0;0m\x1b[48;2;255;255;255m▀\x1b[0m");
    }

    #[test]
    fn test_display_skips_background_for_single_rows() {
        let canvas = RgbImage::from_pixel(1, 1, RED);
        let text = encode(&canvas, (0, 0), true).lines[0].to_string();
        assert_eq!(text, "\x1b[38;2;255;0;0m▄\x1b[0m");
    }

    #[test]
    fn test_queue_moves_cursor_first() {
        let frame = encode(&RgbImage::from_pixel(1, 2, RED), (4, 2), false);
        let mut out = Vec::new();
        frame.queue(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[3;5H"));
        assert!(text.ends_with("▀\x1b[0m"));
    }
}

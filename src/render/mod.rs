pub mod block_encoder;
pub mod screen;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::session::Session;

pub use block_encoder::{GlyphLine, RenderedFrame, encode};
pub use screen::Screen;

/// Redraw the whole screen for the current image and flush it.
///
/// The frame comes from the session cache when it is still valid for
/// `terminal`; the status bar, if shown, goes on the last row.
pub fn draw_session<W: Write>(
    out: &mut W,
    session: &mut Session,
    terminal: (u16, u16),
) -> io::Result<()> {
    let status = session.status_line(terminal);
    let view = session.current_view(terminal);

    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    view.frame.queue(out)?;
    if let Some(status) = status {
        queue!(out, MoveTo(0, terminal.1.saturating_sub(1)), Print(status))?;
    }
    out.flush()?;

    session.mark_rendered();
    Ok(())
}

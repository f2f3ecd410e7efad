use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Duration;

use crate::inputs::event_source::EventSource;
use crate::inputs::{Action, action_for_event};
use crate::render::{Screen, draw_session};
use crate::session::Session;

/// Default wait for a key before re-checking the dirty flags.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the viewer until the user quits.
///
/// Each iteration redraws if the session is dirty, then waits at most
/// `poll_interval` for one event. Resize events only record the new size and
/// mark the session; the rescale itself happens on the next redraw.
pub fn run_viewer_with_event_source<S, E>(
    screen: &mut S,
    session: &mut Session,
    event_source: &mut E,
    poll_interval: Duration,
) -> Result<()>
where
    S: Screen,
    E: EventSource + ?Sized,
{
    let mut terminal = screen.size().context("Failed to query terminal size")?;
    info!("Viewer started at {}x{}", terminal.0, terminal.1);

    loop {
        if session.needs_render() {
            draw_session(screen, session, terminal).context("Failed to draw frame")?;
        }

        if !event_source.poll(poll_interval)? {
            continue;
        }
        let event = event_source.read()?;
        let Some(action) = action_for_event(&event) else {
            continue;
        };
        debug!("Action: {action:?}");

        match action {
            Action::Quit => break,
            Action::Next => {
                session.next();
            }
            Action::Previous => {
                session.previous();
            }
            Action::ToggleStatus => session.toggle_status(),
            Action::Resize(columns, rows) => {
                terminal = (columns, rows);
                session.resize();
            }
        }
    }

    info!("Viewer stopped on image {}", session.navigation().index() + 1);
    Ok(())
}

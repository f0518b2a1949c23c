pub mod trace;

use color_eyre::Result;
use log::debug;
pub use trace::TraceSource;

use crate::{
    api::models::{Frame, FrameState},
    game::Session,
};

/// Anything that hands out detector results one frame at a time: a camera
/// pipeline, a recorded trace, a network peer.
pub trait FrameSource {
    /// Returns `None` once the source is closed.
    ///
    /// # Errors
    ///
    /// Can fail for a wide range of reasons, usually unreadable input.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Runs every frame from `source` through `session` until the source closes,
/// handing each resulting state to `on_frame`. Returns the number of frames
/// played.
///
/// # Errors
///
/// Stops at the first error from the source.
pub fn play<S, F>(source: &mut S, session: &mut Session, mut on_frame: F) -> Result<u64>
where
    S: FrameSource + ?Sized,
    F: FnMut(&FrameState),
{
    let mut frames = 0;
    while let Some(frame) = source.next_frame()? {
        let state = session.frame(frame.fingertip);
        on_frame(&state);
        frames += 1;
    }

    debug!("source closed after {} frames", frames);
    Ok(frames)
}

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};

use super::FrameSource;
use crate::api::{models::Frame, types::Coord};

/// Reads a recorded fingertip trace, one frame per line:
///
/// ```text
/// # comments and blank lines are skipped
/// 640,360
/// -
/// 652,371
/// ```
///
/// A `-` marks a frame in which no hand was found.
pub struct TraceSource<R> {
    lines:       Lines<R>,
    line_number: usize,
}

impl TraceSource<BufReader<File>> {
    /// # Errors
    ///
    /// Fails if the trace file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_err_with(|| format!("failed to open trace {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines:       reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> FrameSource for TraceSource<R> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line.wrap_err("failed to read trace")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return parse_frame(line)
                .map(Some)
                .wrap_err_with(|| format!("bad trace line {}", self.line_number));
        }

        Ok(None)
    }
}

fn parse_frame(line: &str) -> Result<Frame> {
    if line == "-" {
        return Ok(Frame::empty());
    }

    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| eyre!("expected `x,y` or `-`, got {:?}", line))?;

    Ok(Frame::at(Coord {
        x: x.trim().parse()?,
        y: y.trim().parse()?,
    }))
}

//! Streaming transcript renderer
//!
//! Snapshots arrive last-write-wins: each is the full transcript so far.
//! The renderer writes only what is new since the previous snapshot, so the
//! terminal shows the debate growing token by token.

use debate_application::DebateObserver;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

struct RenderState<W> {
    out: W,
    printed: String,
    error: Option<io::Error>,
}

/// Writes transcript snapshots to `W` as incremental suffixes
pub struct TranscriptRenderer<W: Write + Send> {
    state: Mutex<RenderState<W>>,
}

impl TranscriptRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TranscriptRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: Mutex::new(RenderState {
                out,
                printed: String::new(),
                error: None,
            }),
        }
    }

    /// Write the part of `snapshot` not yet on screen.
    ///
    /// A snapshot that does not extend what was printed is written again in
    /// full on a fresh line.
    pub fn render(&self, snapshot: &str) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let RenderState { out, printed, .. } = &mut *state;

        match snapshot.strip_prefix(printed.as_str()) {
            Some("") => return Ok(()),
            Some(suffix) => out.write_all(suffix.as_bytes())?,
            None => {
                writeln!(out)?;
                out.write_all(snapshot.as_bytes())?;
            }
        }
        out.flush()?;

        printed.clear();
        printed.push_str(snapshot);
        Ok(())
    }

    /// End the transcript with a newline and report the first write error.
    pub fn finish(self) -> io::Result<W> {
        let mut state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        if let Some(e) = state.error.take() {
            return Err(e);
        }
        if !state.printed.is_empty() {
            writeln!(state.out)?;
            state.out.flush()?;
        }
        Ok(state.out)
    }
}

impl<W: Write + Send> DebateObserver for TranscriptRenderer<W> {
    fn on_snapshot(&self, snapshot: &str) {
        if let Err(e) = self.render(snapshot) {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.error.get_or_insert(e);
        }
    }
}

//! Global cursor position via `enigo`.

use crate::{PlatformError, PlatformResult};
use colorex_core::{CursorSource, Point};
use enigo::{Enigo, Mouse, Settings};
use std::sync::Mutex;
use tracing::trace;

/// Cursor source backed by an `enigo` connection.
pub struct EnigoCursor {
    enigo: Mutex<Enigo>,
}

impl EnigoCursor {
    pub fn new() -> PlatformResult<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| PlatformError::Cursor(format!("failed to create Enigo: {e}")))?;
        Ok(Self {
            enigo: Mutex::new(enigo),
        })
    }

    pub fn location(&self) -> PlatformResult<Point> {
        let enigo = self
            .enigo
            .lock()
            .map_err(|_| PlatformError::Cursor("enigo lock poisoned".into()))?;
        let (x, y) = enigo
            .location()
            .map_err(|e| PlatformError::Cursor(e.to_string()))?;
        Ok(Point::new(x, y))
    }
}

impl CursorSource for EnigoCursor {
    fn cursor_position(&self) -> Option<Point> {
        match self.location() {
            Ok(point) => Some(point),
            Err(error) => {
                trace!(%error, "cursor position unavailable");
                None
            }
        }
    }
}

/// Cursor source used when no input backend could be created.
pub struct NoopCursor;

impl CursorSource for NoopCursor {
    fn cursor_position(&self) -> Option<Point> {
        None
    }
}

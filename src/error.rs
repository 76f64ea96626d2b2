// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing the pixel buffer to the window failed
    Dimensions(String),   // Width/height unusable for a window
    Snapshot(String),     // Writing a PNG snapshot failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Dimensions(s) => write!(f, "Dimensions error: {s}"),
            Error::Snapshot(s) => write!(f, "Snapshot error: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_stage() {
        let e = Error::WindowInit("no display".into());
        assert_eq!(e.to_string(), "Window init error: no display");
        let e = Error::Snapshot("disk full".into());
        assert_eq!(e.to_string(), "Snapshot error: disk full");
    }
}

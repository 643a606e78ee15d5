//! Per-user "has seen the intro" flag
//!
//! The flag is set once and read once per session. It is injected where it
//! is needed instead of living in global state.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage for the intro flag
pub trait IntroFlag {
    /// Whether the intro has been shown before
    fn has_seen_intro(&self) -> bool;

    /// Record that the intro has been shown
    ///
    /// # Errors
    /// Returns an error if the flag cannot be persisted
    fn mark_seen(&mut self) -> io::Result<()>;
}

/// Intro flag persisted as a marker file
#[derive(Debug, Clone)]
pub struct FileIntroFlag {
    marker: PathBuf,
}

impl FileIntroFlag {
    /// Use `marker` as the flag file; its existence means "seen"
    pub fn new(marker: impl Into<PathBuf>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Forget that the intro was shown
    ///
    /// # Errors
    /// Returns an error if the marker exists but cannot be removed
    pub fn clear(&self) -> io::Result<()> {
        if self.marker.exists() {
            fs::remove_file(&self.marker)?;
        }
        Ok(())
    }
}

impl IntroFlag for FileIntroFlag {
    fn has_seen_intro(&self) -> bool {
        self.marker.exists()
    }

    fn mark_seen(&mut self) -> io::Result<()> {
        if let Some(parent) = self.marker.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.marker, "true\n")
    }
}

/// Intro flag that lives only for the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryIntroFlag {
    seen: bool,
}

impl MemoryIntroFlag {
    /// Create a flag with an initial value
    #[must_use]
    pub const fn new(seen: bool) -> Self {
        Self { seen }
    }
}

impl IntroFlag for MemoryIntroFlag {
    fn has_seen_intro(&self) -> bool {
        self.seen
    }

    fn mark_seen(&mut self) -> io::Result<()> {
        self.seen = true;
        Ok(())
    }
}

/// Run `show` the first time only, then set the flag
///
/// Returns whether the intro was shown. A flag that cannot be saved only
/// means the intro shows again next time.
pub fn show_intro_once(flag: &mut dyn IntroFlag, show: impl FnOnce()) -> bool {
    if flag.has_seen_intro() {
        return false;
    }
    show();
    if let Err(e) = flag.mark_seen() {
        crate::warn!("Could not save intro flag: {e}");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_flag_shows_once() {
        let mut flag = MemoryIntroFlag::default();
        let mut shown = 0;
        assert!(show_intro_once(&mut flag, || shown += 1));
        assert!(!show_intro_once(&mut flag, || shown += 1));
        assert_eq!(shown, 1);
    }

    #[test]
    fn test_file_flag_round_trip() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let marker = dir.path().join("nested").join("seen_intro");

        let mut flag = FileIntroFlag::new(&marker);
        assert!(!flag.has_seen_intro());
        flag.mark_seen().expect("mark seen");
        assert!(FileIntroFlag::new(&marker).has_seen_intro());

        flag.clear().expect("clear");
        assert!(!flag.has_seen_intro());
    }
}

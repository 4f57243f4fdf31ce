//! Session state owned by the presentation layer.
//!
//! The pipeline juggles three images: the loaded original, its noisy
//! derivative, and the filtered result read back from the external filtering
//! stage. A [`Session`] holds them as explicit named slots so the core
//! operations stay stateless and receive grids by reference.

use std::fmt;

use crate::grid::PixelGrid;

/// Names of the three image slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The loaded reference image.
    Original,
    /// The noise-degraded derivative.
    Noisy,
    /// The result returned by the external filtering stage.
    Filtered,
}

impl Slot {
    /// Lowercase label used in output and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Noisy => "noisy",
            Self::Filtered => "filtered",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Holder for the three image slots; empty slots are absent, not zero-sized.
#[derive(Debug, Default)]
pub struct Session {
    original: Option<PixelGrid>,
    noisy: Option<PixelGrid>,
    filtered: Option<PixelGrid>,
}

impl Session {
    /// Create a session with all slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the grid in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&PixelGrid> {
        self.slot(slot).as_ref()
    }

    /// Store `grid` in `slot`, returning the displaced grid if one was there.
    pub fn set(&mut self, slot: Slot, grid: PixelGrid) -> Option<PixelGrid> {
        self.slot_mut(slot).replace(grid)
    }

    /// Remove and return the grid in `slot`.
    pub fn take(&mut self, slot: Slot) -> Option<PixelGrid> {
        self.slot_mut(slot).take()
    }

    /// Whether `slot` currently holds a grid.
    #[must_use]
    pub fn is_loaded(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    fn slot(&self, slot: Slot) -> &Option<PixelGrid> {
        match slot {
            Slot::Original => &self.original,
            Slot::Noisy => &self.noisy,
            Slot::Filtered => &self.filtered,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<PixelGrid> {
        match slot {
            Slot::Original => &mut self.original,
            Slot::Noisy => &mut self.noisy,
            Slot::Filtered => &mut self.filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_start_empty() {
        let session = Session::new();
        for slot in [Slot::Original, Slot::Noisy, Slot::Filtered] {
            assert!(!session.is_loaded(slot));
            assert!(session.get(slot).is_none());
        }
    }

    #[test]
    fn test_set_get_take() {
        let mut session = Session::new();
        let grid = PixelGrid::filled(1, 2, 2).unwrap();

        assert!(session.set(Slot::Noisy, grid.clone()).is_none());
        assert!(session.is_loaded(Slot::Noisy));
        assert!(!session.is_loaded(Slot::Original));
        assert_eq!(session.get(Slot::Noisy), Some(&grid));

        let displaced = session.set(Slot::Noisy, PixelGrid::filled(2, 2, 2).unwrap());
        assert_eq!(displaced, Some(grid));

        assert!(session.take(Slot::Noisy).is_some());
        assert!(!session.is_loaded(Slot::Noisy));
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(Slot::Original.label(), "original");
        assert_eq!(Slot::Noisy.label(), "noisy");
        assert_eq!(Slot::Filtered.to_string(), "filtered");
    }
}

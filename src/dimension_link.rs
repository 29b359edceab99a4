//! Keeps width and height edits in proportion to the source image.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn other(&self) -> Self {
        match self {
            Dimension::Width => Dimension::Height,
            Dimension::Height => Dimension::Width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLinker {
    /// Width / height of the loaded source image.
    aspect_ratio: Option<f64>,
    locked: bool,
}

impl Default for DimensionLinker {
    fn default() -> Self {
        Self {
            aspect_ratio: None,
            locked: true,
        }
    }
}

impl DimensionLinker {
    pub fn with_aspect_ratio(aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio: Some(aspect_ratio),
            ..Default::default()
        }
    }

    /// Records the proportions of a newly loaded image.
    /// The lock state carries over.
    pub fn set_source_size(&mut self, width: u32, height: u32) {
        self.aspect_ratio = if height == 0 {
            None
        } else {
            Some(f64::from(width) / f64::from(height))
        };
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Flips the lock. Existing values are not adjusted; only the next edit is.
    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    /// Returns the value the other dimension should take after `edited` was set to `new_value`.
    ///
    /// `complement` is returned unchanged when the ratio is unlocked or unknown,
    /// and for non-positive values, which are treated as incomplete input.
    pub fn on_dimension_edited(&self, edited: Dimension, new_value: i64, complement: u32) -> u32 {
        let ratio = match self.aspect_ratio {
            Some(ratio) if self.locked && ratio.is_finite() && ratio > 0.0 => ratio,
            _ => return complement,
        };
        if new_value <= 0 {
            return complement;
        }
        let new_value = new_value as f64;
        let linked = match edited {
            Dimension::Width => new_value / ratio,
            Dimension::Height => new_value * ratio,
        };
        // `as` saturates, so absurd inputs can't wrap around
        linked.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_locked_edits() {
        let linker = DimensionLinker::with_aspect_ratio(2.0);
        let height = linker.on_dimension_edited(Dimension::Width, 400, 0);
        assert_eq!(height, 200);
        let width = linker.on_dimension_edited(Dimension::Height, 150, 400);
        assert_eq!(width, 300);
    }

    #[test]
    fn test_rounding() {
        let mut linker = DimensionLinker::default();
        linker.set_source_size(1920, 1080);
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 1001, 1080), 563);
        assert_eq!(linker.on_dimension_edited(Dimension::Height, 100, 1920), 178);
    }

    #[test]
    fn test_incomplete_input_is_ignored() {
        let linker = DimensionLinker::with_aspect_ratio(1.5);
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 0, 77), 77);
        assert_eq!(linker.on_dimension_edited(Dimension::Height, -5, 77), 77);
    }

    #[test]
    fn test_unknown_ratio_is_a_no_op() {
        let mut linker = DimensionLinker::default();
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 640, 10), 10);
        linker.set_source_size(640, 0);
        assert_eq!(linker.aspect_ratio(), None);
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 640, 10), 10);
        linker.set_source_size(0, 480);
        assert_eq!(linker.on_dimension_edited(Dimension::Height, 480, 10), 10);
    }

    #[test]
    fn test_toggle_does_not_recompute() {
        let mut linker = DimensionLinker::with_aspect_ratio(2.0);
        assert!(linker.is_locked());
        linker.toggle_lock();
        assert!(!linker.is_locked());
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 400, 33), 33);
        linker.toggle_lock();
        assert_eq!(linker.on_dimension_edited(Dimension::Width, 400, 33), 200);
    }

    #[test]
    fn test_new_image_keeps_lock_state() {
        let mut linker = DimensionLinker::with_aspect_ratio(2.0);
        linker.set_locked(false);
        linker.set_source_size(300, 100);
        assert!(!linker.is_locked());
        assert_eq!(linker.aspect_ratio(), Some(3.0));
    }

    #[quickcheck]
    fn unlocked_never_touches_complement(width: u16, value: i64, complement: u32) -> bool {
        let mut linker = DimensionLinker::default();
        linker.set_source_size(u32::from(width), 100);
        linker.set_locked(false);
        linker.on_dimension_edited(Dimension::Width, value, complement) == complement
            && linker.on_dimension_edited(Dimension::Height, value, complement) == complement
    }
}

use log::warn;

use crate::arg_parsers::{numbers::strip_and_parse_number, ConversionMode, Quality, Subsampling};
use crate::capabilities::{self, BitDepth, OutputFormat, Resolution};
use crate::dimension_link::{Dimension, DimensionLinker};

/// Everything the user has chosen on the settings form.
///
/// Edits go through the setters so that the capability rules and the
/// aspect-ratio lock are enforced the same way every time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SettingsState {
    pub mode: ConversionMode,
    pub format: OutputFormat,
    pub bit_depth: BitDepth,
    pub preserve_alpha: bool,
    pub quality: Quality,
    pub subsampling: Subsampling,
    /// `None` means "auto", i.e. the size of the source image
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub linker: DimensionLinker,
    pub strip_metadata: bool,
}

impl SettingsState {
    /// Clamps the bit depth and alpha choice to what the current format supports.
    /// Safe to call any number of times.
    pub fn resolve(&mut self) -> Resolution {
        let resolution = capabilities::resolve(self.format, self.bit_depth);
        if resolution.bit_depth_was_clamped() {
            warn!(
                "{} is not available for {}, using {}",
                resolution.requested_bit_depth, self.format, resolution.effective_bit_depth
            );
        }
        if resolution.forces_alpha_off() && self.preserve_alpha {
            warn!(
                "{} at {} cannot store transparency, it will be dropped",
                self.format, resolution.effective_bit_depth
            );
        }
        if resolution.alpha_warning_visible {
            warn!("16-bit transparency is only supported for TIFF format");
        }
        resolution.apply_to(self);
        resolution
    }

    pub fn set_format(&mut self, format: OutputFormat) -> Resolution {
        self.format = format;
        self.resolve()
    }

    pub fn set_bit_depth(&mut self, bit_depth: BitDepth) -> Resolution {
        self.bit_depth = bit_depth;
        self.resolve()
    }

    /// Quality, if the format has a quality setting at all
    pub fn effective_quality(&self) -> Option<Quality> {
        self.format.capability().quality.then_some(self.quality)
    }

    pub fn effective_subsampling(&self) -> Option<Subsampling> {
        self.format
            .capability()
            .subsampling
            .then_some(self.subsampling)
    }

    /// Resets the dimensions to those of a newly loaded image.
    pub fn load_source(&mut self, width: u32, height: u32) {
        self.linker.set_source_size(width, height);
        self.width = (width > 0).then_some(width);
        self.height = (height > 0).then_some(height);
    }

    pub fn dimension(&self, which: Dimension) -> Option<u32> {
        match which {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    fn set_dimension(&mut self, which: Dimension, value: Option<u32>) {
        match which {
            Dimension::Width => self.width = value,
            Dimension::Height => self.height = value,
        }
    }

    /// Applies text typed into the width or height field.
    ///
    /// Anything that isn't a positive number leaves the field on "auto"
    /// and the other dimension untouched.
    pub fn edit_dimension(&mut self, which: Dimension, raw: &str) {
        let Ok(value) = strip_and_parse_number::<i64>(raw) else {
            self.set_dimension(which, None);
            return;
        };
        self.edit_dimension_value(which, value);
    }

    pub fn edit_dimension_value(&mut self, which: Dimension, value: i64) {
        let Some(value) = u32::try_from(value).ok().filter(|v| *v > 0) else {
            self.set_dimension(which, None);
            return;
        };
        self.set_dimension(which, Some(value));
        let other = which.other();
        let current = self.dimension(other).unwrap_or(0);
        let linked = self
            .linker
            .on_dimension_edited(which, i64::from(value), current);
        if linked > 0 {
            self.set_dimension(other, Some(linked));
        }
    }

    pub fn toggle_aspect_lock(&mut self) {
        self.linker.toggle_lock();
    }

    pub fn aspect_locked(&self) -> bool {
        self.linker.is_locked()
    }

    /// Size of the output for a source of the given size.
    /// Both dimensions must be set, otherwise the source size is kept.
    pub fn target_size(&self, source_width: u32, source_height: u32) -> (u32, u32) {
        match (self.width, self.height) {
            (Some(width), Some(height)) => (width, height),
            _ => (source_width, source_height),
        }
    }
}

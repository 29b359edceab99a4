//! Output format capabilities and the resolver that keeps the encoding
//! settings consistent with them.
//!
//! The table in [`OutputFormat::capability`] is a closed contract: the
//! settings form and the conversion service both depend on it, so any change
//! here is a breaking change.

use std::{fmt::Display, str::FromStr};

use strum::{EnumString, VariantArray};

use crate::settings::SettingsState;

#[derive(EnumString, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    #[strum(serialize = ".png", serialize = "png")]
    Png,
    #[strum(serialize = ".jpeg", serialize = "jpeg", serialize = ".jpg", serialize = "jpg")]
    Jpeg,
    #[strum(serialize = ".heic", serialize = "heic", serialize = ".heif", serialize = "heif")]
    Heic,
    #[strum(serialize = ".tiff", serialize = "tiff", serialize = ".tif", serialize = "tif")]
    Tiff,
    #[strum(serialize = ".webp", serialize = "webp")]
    WebP,
    #[strum(serialize = ".bmp", serialize = "bmp")]
    Bmp,
}

impl OutputFormat {
    /// The form key of the format, which doubles as the output file extension.
    pub fn key(&self) -> &'static str {
        match self {
            OutputFormat::Png => ".png",
            OutputFormat::Jpeg => ".jpeg",
            OutputFormat::Heic => ".heic",
            OutputFormat::Tiff => ".tiff",
            OutputFormat::WebP => ".webp",
            OutputFormat::Bmp => ".bmp",
        }
    }

    pub fn capability(&self) -> &'static FormatCapability {
        match self {
            OutputFormat::Png => &PNG,
            OutputFormat::Jpeg => &JPEG,
            OutputFormat::Heic => &HEIC,
            OutputFormat::Tiff => &TIFF,
            OutputFormat::WebP => &WEBP,
            OutputFormat::Bmp => &BMP,
        }
    }

    /// Looks up a format by its form key, e.g. `.png`.
    pub fn from_key(key: &str) -> Result<Self, UnknownFormat> {
        Self::from_str(key).map_err(|_| UnknownFormat(key.to_owned()))
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Heic => "HEIC",
            OutputFormat::Tiff => "TIFF",
            OutputFormat::WebP => "WEBP",
            OutputFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

/// Bits per channel of the encoded output.
#[derive(VariantArray, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum BitDepth {
    #[default]
    Eight = 8,
    Ten = 10,
    Sixteen = 16,
}

impl BitDepth {
    pub fn bits(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(BitDepth::Eight),
            10 => Ok(BitDepth::Ten),
            16 => Ok(BitDepth::Sixteen),
            other => Err(other),
        }
    }
}

impl Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// When a format can carry an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaSupport {
    Never,
    Always,
    EightBitOnly,
}

impl AlphaSupport {
    pub fn allows(&self, depth: BitDepth) -> bool {
        match self {
            AlphaSupport::Never => false,
            AlphaSupport::Always => true,
            AlphaSupport::EightBitOnly => depth == BitDepth::Eight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Ordered from lowest to highest; the first entry is the fallback.
    pub bit_depths: &'static [BitDepth],
    pub alpha: AlphaSupport,
    pub quality: bool,
    pub subsampling: bool,
}

impl FormatCapability {
    pub fn supports_bit_depth(&self, depth: BitDepth) -> bool {
        self.bit_depths.contains(&depth)
    }

    pub fn alpha_supported(&self, depth: BitDepth) -> bool {
        self.alpha.allows(depth)
    }

    fn fallback_bit_depth(&self) -> BitDepth {
        // every entry in the table lists at least one depth
        self.bit_depths[0]
    }
}

static PNG: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight, BitDepth::Sixteen],
    alpha: AlphaSupport::EightBitOnly,
    quality: false,
    subsampling: false,
};

static JPEG: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight],
    alpha: AlphaSupport::Never,
    quality: true,
    subsampling: true,
};

static HEIC: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight, BitDepth::Ten],
    alpha: AlphaSupport::EightBitOnly,
    quality: true,
    subsampling: true,
};

static TIFF: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight, BitDepth::Sixteen],
    alpha: AlphaSupport::Always,
    quality: false,
    subsampling: false,
};

static WEBP: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight],
    alpha: AlphaSupport::Always,
    quality: true,
    subsampling: false,
};

static BMP: FormatCapability = FormatCapability {
    bit_depths: &[BitDepth::Eight],
    alpha: AlphaSupport::Never,
    quality: false,
    subsampling: false,
};

/// Format key outside of the supported set.
/// Unreachable through [`OutputFormat`]; only string keys can produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl Display for UnknownFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown output format `{}'", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

/// Outcome of validating a format and bit depth combination:
/// the clamped settings plus which controls the settings form should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub format: OutputFormat,
    pub allowed_bit_depths: &'static [BitDepth],
    pub requested_bit_depth: BitDepth,
    pub effective_bit_depth: BitDepth,
    pub alpha_allowed: bool,
    pub quality_control_visible: bool,
    pub subsampling_control_visible: bool,
    /// High-bit-depth transparency cannot be delivered for this format.
    pub alpha_warning_visible: bool,
}

impl Resolution {
    /// The caller must turn off "preserve alpha" when this is set.
    pub fn forces_alpha_off(&self) -> bool {
        !self.alpha_allowed
    }

    pub fn bit_depth_was_clamped(&self) -> bool {
        self.requested_bit_depth != self.effective_bit_depth
    }

    /// Applies the clamped bit depth and alpha instruction to the settings.
    pub fn apply_to(&self, settings: &mut SettingsState) {
        settings.format = self.format;
        settings.bit_depth = self.effective_bit_depth;
        if self.forces_alpha_off() {
            settings.preserve_alpha = false;
        }
    }
}

pub fn resolve(format: OutputFormat, requested: BitDepth) -> Resolution {
    let capability = format.capability();
    let effective = if capability.supports_bit_depth(requested) {
        requested
    } else {
        capability.fallback_bit_depth()
    };
    Resolution {
        format,
        allowed_bit_depths: capability.bit_depths,
        requested_bit_depth: requested,
        effective_bit_depth: effective,
        alpha_allowed: capability.alpha_supported(effective),
        quality_control_visible: capability.quality,
        subsampling_control_visible: capability.subsampling,
        // WEBP only ever offers 8-bit, so its half of this condition cannot fire today
        alpha_warning_visible: effective > BitDepth::Eight
            && matches!(format, OutputFormat::Png | OutputFormat::WebP),
    }
}

/// Like [`resolve`], but takes the format's form key.
pub fn resolve_key(key: &str, requested: BitDepth) -> Result<Resolution, UnknownFormat> {
    Ok(resolve(OutputFormat::from_key(key)?, requested))
}

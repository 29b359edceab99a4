use crate::arg_parse_err::ArgParseErr;
use std::{ffi::OsStr, fmt::Display, str::FromStr};

use strum::{EnumString, VariantArray};

/// How a color is reduced to a single gray level.
#[derive(EnumString, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    #[default]
    #[strum(serialize = "Rec. 709", serialize = "rec709")]
    Rec709,
    #[strum(serialize = "Rec. 601", serialize = "rec601")]
    Rec601,
    #[strum(serialize = "Rec. 2100", serialize = "rec2100")]
    Rec2100,
    #[strum(serialize = "Gamma", serialize = "gamma")]
    Gamma,
    #[strum(serialize = "L*a*b* (L*)", serialize = "lstar")]
    LStar,
    #[strum(serialize = "HSL (Lightness)", serialize = "hsl")]
    HslLightness,
    #[strum(serialize = "HSV (Value)", serialize = "hsv")]
    HsvValue,
}

impl ConversionMode {
    /// Parses a label from the settings form.
    /// Labels that aren't recognized select the default, Rec. 709.
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConversionMode::Rec709 => "Rec. 709",
            ConversionMode::Rec601 => "Rec. 601",
            ConversionMode::Rec2100 => "Rec. 2100",
            ConversionMode::Gamma => "Gamma",
            ConversionMode::LStar => "L*a*b* (L*)",
            ConversionMode::HslLightness => "HSL (Lightness)",
            ConversionMode::HsvValue => "HSV (Value)",
        }
    }
}

impl Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&OsStr> for ConversionMode {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let string: &str = s
            .to_str()
            .ok_or_else(|| ArgParseErr::with_msg("invalid conversion mode"))?;
        Self::from_str(string).map_err(|_| ArgParseErr::with_msg("unknown conversion mode"))
    }
}

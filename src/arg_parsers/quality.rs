use std::{ffi::OsStr, fmt::Display, str::FromStr};

use strum::{EnumString, VariantArray};

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::numbers::parse_numeric_arg;

/// Lossy encoder quality, 1 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<&OsStr> for Quality {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        let number: u8 = parse_numeric_arg(value)?;
        Self::new(number).ok_or_else(|| ArgParseErr::with_msg("quality must be between 1 and 100"))
    }
}

/// Chroma subsampling of the encoded output.
/// The numeric forms are the codes the conversion service expects.
#[derive(EnumString, VariantArray, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subsampling {
    #[default]
    #[strum(serialize = "4:4:4", serialize = "0")]
    S444,
    #[strum(serialize = "4:2:2", serialize = "1")]
    S422,
    #[strum(serialize = "4:2:0", serialize = "2")]
    S420,
}

impl Subsampling {
    pub fn code(&self) -> u8 {
        match self {
            Subsampling::S444 => 0,
            Subsampling::S422 => 1,
            Subsampling::S420 => 2,
        }
    }

    pub fn ratio(&self) -> &'static str {
        match self {
            Subsampling::S444 => "4:4:4",
            Subsampling::S422 => "4:2:2",
            Subsampling::S420 => "4:2:0",
        }
    }
}

impl Display for Subsampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ratio())
    }
}

impl TryFrom<&OsStr> for Subsampling {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        value
            .to_str()
            .ok_or_else(ArgParseErr::new)
            .and_then(|s| {
                Self::from_str(s.trim()).map_err(|_| {
                    ArgParseErr::with_msg("expected one of 4:4:4, 4:2:2, 4:2:0")
                })
            })
    }
}

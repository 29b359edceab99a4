use std::ffi::OsStr;

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::numbers::parse_numeric_arg;
use crate::capabilities::{BitDepth, OutputFormat};

impl TryFrom<&OsStr> for OutputFormat {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        let key = value.to_str().ok_or_else(ArgParseErr::new)?;
        OutputFormat::from_key(key.trim()).map_err(|e| ArgParseErr::with_msg(e))
    }
}

impl TryFrom<&OsStr> for BitDepth {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        let bits: u8 = parse_numeric_arg(value)?;
        BitDepth::try_from(bits)
            .map_err(|bits| ArgParseErr::with_msg(format!("unsupported bit depth {bits}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg() {
        assert_eq!(
            OutputFormat::try_from(OsStr::new(".webp")),
            Ok(OutputFormat::WebP)
        );
        assert_eq!(
            OutputFormat::try_from(OsStr::new("HEIF")),
            Ok(OutputFormat::Heic)
        );
        assert_eq!(
            OutputFormat::try_from(OsStr::new("gif")),
            Err(ArgParseErr::with_msg("unknown output format `gif'"))
        );
    }

    #[test]
    fn test_bit_depth_arg() {
        assert_eq!(BitDepth::try_from(OsStr::new("16")), Ok(BitDepth::Sixteen));
        assert_eq!(
            BitDepth::try_from(OsStr::new("12")),
            Err(ArgParseErr::with_msg("unsupported bit depth 12"))
        );
        assert!(BitDepth::try_from(OsStr::new("sixteen")).is_err());
    }
}

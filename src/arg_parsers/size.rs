use std::{ffi::OsStr, fmt::Display, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Requested output dimensions, `WxH`. Either side may be left out (`800x`, `x600`),
/// in which case it follows the source image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct SizeGeometry {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Display for SizeGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(w) = self.width {
            write!(f, "{w}")?;
        }
        f.write_str("x")?;
        if let Some(h) = self.height {
            write!(f, "{h}")?;
        }
        Ok(())
    }
}

impl FromStr for SizeGeometry {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (width, height) = match s.split_once(|c: char| c == 'x' || c == 'X') {
            Some((w, h)) => (w, h),
            // a lone number sets the width
            None => (s, ""),
        };
        let geometry = SizeGeometry {
            width: parse_side(width)?,
            height: parse_side(height)?,
        };
        if geometry.width.is_none() && geometry.height.is_none() {
            return Err(ArgParseErr::with_msg("no dimensions given"));
        }
        Ok(geometry)
    }
}

impl TryFrom<&OsStr> for SizeGeometry {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        value
            .to_str()
            .ok_or_else(ArgParseErr::new)
            .and_then(FromStr::from_str)
    }
}

/// Empty and zero both mean "auto"
fn parse_side(side: &str) -> Result<Option<u32>, ArgParseErr> {
    if side.is_empty() {
        return Ok(None);
    }
    let value: u32 = side.parse()?;
    Ok((value > 0).then_some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_sides() {
        assert_eq!(
            SizeGeometry::from_str("800x600"),
            Ok(SizeGeometry {
                width: Some(800),
                height: Some(600)
            })
        );
    }

    #[test]
    fn test_one_side() {
        assert_eq!(
            SizeGeometry::from_str("800x"),
            Ok(SizeGeometry {
                width: Some(800),
                height: None
            })
        );
        assert_eq!(
            SizeGeometry::from_str("x600"),
            Ok(SizeGeometry {
                width: None,
                height: Some(600)
            })
        );
        assert_eq!(
            SizeGeometry::from_str("640"),
            Ok(SizeGeometry {
                width: Some(640),
                height: None
            })
        );
    }

    #[test]
    fn test_zero_means_auto() {
        assert_eq!(
            SizeGeometry::from_str("0x300"),
            Ok(SizeGeometry {
                width: None,
                height: Some(300)
            })
        );
        assert!(SizeGeometry::from_str("0x0").is_err());
    }

    #[test]
    fn test_invalid() {
        assert!(SizeGeometry::from_str("").is_err());
        assert!(SizeGeometry::from_str("x").is_err());
        assert!(SizeGeometry::from_str("-5x10").is_err());
        assert!(SizeGeometry::from_str("12.5x10").is_err());
        assert!(SizeGeometry::from_str("axb").is_err());
    }

    #[test]
    fn test_display() {
        let geometry = SizeGeometry {
            width: None,
            height: Some(50),
        };
        assert_eq!(geometry.to_string(), "x50");
        assert_eq!(SizeGeometry::from_str(&geometry.to_string()), Ok(geometry));
    }
}

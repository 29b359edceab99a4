//! Command-line argument parsing.
//!
//! Options are single-dash (`-format .png`) and may appear anywhere among the
//! input files, so this is parsed by hand rather than with an argument parsing library.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::{encode::Location, error::GrayError, plan::PreviewPlan, wg_err};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Arg {
    Mode,
    Format,
    Depth,
    Quality,
    Subsampling,
    Size,
    Unlock,
    Alpha,
    Strip,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        match self {
            Arg::Mode => true,
            Arg::Format => true,
            Arg::Depth => true,
            Arg::Quality => true,
            Arg::Subsampling => true,
            Arg::Size => true,
            Arg::Unlock => false,
            Arg::Alpha => false,
            Arg::Strip => false,
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Mode => "grayscale conversion mode, e.g. rec709, gamma, hsl",
            Arg::Format => "output format: png, jpeg, heic, tiff, webp or bmp",
            Arg::Depth => "bits per channel: 8, 10 or 16",
            Arg::Quality => "encoder quality 1-100, for formats that have it",
            Arg::Subsampling => "chroma subsampling: 4:4:4, 4:2:2 or 4:2:0",
            Arg::Size => "output dimensions WxH; one side follows the aspect ratio",
            Arg::Unlock => "do not keep the aspect ratio when only one side is given",
            Arg::Alpha => "preserve transparency where the format allows it",
            Arg::Strip => "strip metadata (EXIF, etc.) from the output",
        }
    }
}

pub fn parse_args(mut args: Vec<OsString>) -> Result<PreviewPlan, GrayError> {
    if args.len() <= 1 {
        return Err(wg_err!("No command-line arguments provided"));
    }

    // The output is always the last argument. `-` means standard output.
    let output = args.pop().unwrap_or_default();
    let output = if output.as_encoded_bytes() == b"-" {
        Location::Stdio
    } else if starts_with_dash(&output) {
        return Err(wg_err!(
            "missing an image filename `{}'",
            output.to_string_lossy()
        ));
    } else {
        Location::Path(PathBuf::from(output))
    };

    let mut plan = PreviewPlan {
        output,
        ..Default::default()
    };

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if starts_with_dash(&raw_arg) {
            let string_arg = arg_name(raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str())
                .map_err(|_| wg_err!("unrecognized option `-{}'", string_arg))?;
            let value = if arg.needs_value() {
                iter.next()
            } else {
                None
            };
            plan.apply_arg(arg, value.as_deref())?;
        } else {
            plan.add_input_file(PathBuf::from(raw_arg));
        }
    }
    if plan.input_files.is_empty() {
        return Err(wg_err!("no images defined"));
    }
    Ok(plan)
}

/// Checks if the string looks like an option: `-foo` but not `-` or `--foo`
fn starts_with_dash(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-' && bytes[1] != b'-'
}

/// Strips the leading dash
fn arg_name(raw_arg: OsString) -> Result<String, GrayError> {
    let mut string = raw_arg
        .into_string()
        .map_err(|s| wg_err!("unrecognized option `{}'", s.to_string_lossy()))?;
    string.remove(0);
    Ok(string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg_parsers::ConversionMode;
    use crate::capabilities::OutputFormat;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("wg-preview")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_options_and_files() {
        let plan = parse_args(args(&[
            "-mode", "gamma", "a.png", "-format", "jpg", "b.png", "-alpha", "out",
        ]))
        .unwrap();
        assert_eq!(plan.settings.mode, ConversionMode::Gamma);
        assert_eq!(plan.settings.format, OutputFormat::Jpeg);
        assert!(plan.settings.preserve_alpha);
        assert_eq!(
            plan.input_files,
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
        assert_eq!(plan.output, Location::Path(PathBuf::from("out")));
    }

    #[test]
    fn test_stdout_output() {
        let plan = parse_args(args(&["in.png", "-"])).unwrap();
        assert_eq!(plan.output, Location::Stdio);
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["out.png"])).is_err());
        assert!(parse_args(args(&["in.png", "-alpha"])).is_err());
        assert!(parse_args(args(&["-bogus", "in.png", "out.png"])).is_err());
        // missing value
        assert!(parse_args(args(&["in.png", "-depth", "out.png"])).is_err());
        assert!(parse_args(args(&["-depth", "12", "in.png", "out.png"])).is_err());
    }

    #[test]
    fn test_double_dash_is_a_file() {
        let plan = parse_args(args(&["--weird-name.png", "out.png"])).unwrap();
        assert_eq!(plan.input_files, vec![PathBuf::from("--weird-name.png")]);
    }
}

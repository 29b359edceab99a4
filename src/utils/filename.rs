use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

const SUFFIX: &str = "_grayscale";

/// Name of the converted file: the input's stem, `_grayscale`, then `extension`
/// (which includes the leading dot, like the format keys do).
/// Any directory components of `input` are dropped.
pub fn grayscale_file_name(input: &Path, extension: &str) -> OsString {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("image"));
    let mut name = stem.to_owned();
    name.push(SUFFIX);
    name.push(extension);
    name
}

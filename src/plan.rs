use std::{collections::HashSet, ffi::OsStr, path::PathBuf};

use log::{debug, info};

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::{ConversionMode, Quality, SizeGeometry, Subsampling};
use crate::args::Arg;
use crate::capabilities::{BitDepth, OutputFormat};
use crate::decode::decode;
use crate::dimension_link::Dimension;
use crate::encode::{encode, Location};
use crate::operations::preview_operations;
use crate::settings::SettingsState;
use crate::utils::filename::grayscale_file_name;
use crate::{error::GrayError, wg_err};

/// Plan for previewing one or more files with the same settings
#[derive(Debug, Default)]
pub struct PreviewPlan {
    pub settings: SettingsState,
    /// Applied per file, because every file has its own aspect ratio
    pub size: Option<SizeGeometry>,
    pub input_files: Vec<PathBuf>,
    pub output: Location,
}

impl PreviewPlan {
    pub fn apply_arg(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), GrayError> {
        let arg_string: &'static str = arg.into();
        if arg.needs_value() != value.is_some() {
            return Err(wg_err!("argument requires a value: -{arg_string}"));
        };

        self.apply_arg_inner(arg, value).map_err(|arg_err| {
            wg_err!(
                "{}",
                arg_err.display_with_arg(arg_string, value.unwrap_or_default())
            )
        })
    }

    /// Currently this can only fail due to argument parsing.
    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_arg_inner(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), ArgParseErr> {
        let value = value.unwrap_or_default();
        match arg {
            Arg::Mode => self.settings.mode = ConversionMode::try_from(value)?,
            Arg::Format => self.settings.format = OutputFormat::try_from(value)?,
            Arg::Depth => self.settings.bit_depth = BitDepth::try_from(value)?,
            Arg::Quality => self.settings.quality = Quality::try_from(value)?,
            Arg::Subsampling => self.settings.subsampling = Subsampling::try_from(value)?,
            Arg::Size => self.size = Some(SizeGeometry::try_from(value)?),
            Arg::Unlock => self.settings.linker.set_locked(false),
            Arg::Alpha => self.settings.preserve_alpha = true,
            Arg::Strip => self.settings.strip_metadata = true,
        }
        Ok(())
    }

    pub fn add_input_file(&mut self, file: PathBuf) {
        self.input_files.push(file);
    }

    pub fn execute(&self) -> Result<(), GrayError> {
        if self.input_files.is_empty() {
            return Err(wg_err!("no images defined"));
        }
        let mut settings = self.settings;
        let resolution = settings.resolve();
        debug!("resolved settings: {resolution:?}");
        if let Some(quality) = settings.effective_quality() {
            debug!("quality {quality}");
        }
        if let Some(subsampling) = settings.effective_subsampling() {
            debug!("chroma subsampling {subsampling}");
        }
        if settings.strip_metadata {
            debug!("metadata will be stripped from the delivered files");
        }

        for (input, output) in self.input_files.iter().zip(self.output_locations()?) {
            let mut image = decode(input)?;
            info!("{}", image.info_line());

            let file_settings = self.settings_for(settings, image.pixels.width(), image.pixels.height());
            let ops = preview_operations(
                &file_settings,
                image.pixels.width(),
                image.pixels.height(),
            );
            for operation in &ops {
                debug!("{}: {operation:?}", input.display());
                operation.execute(&mut image);
            }

            info!(
                "{} will be delivered as {}",
                input.display(),
                grayscale_file_name(input, settings.format.key()).to_string_lossy()
            );
            encode(&image, &output)?;
        }

        Ok(())
    }

    /// Settings with the requested size fitted to a source of the given dimensions.
    fn settings_for(&self, mut settings: SettingsState, width: u32, height: u32) -> SettingsState {
        settings.load_source(width, height);
        match self.size {
            Some(SizeGeometry {
                width: Some(w),
                height: Some(h),
            }) => {
                settings.width = Some(w);
                settings.height = Some(h);
            }
            Some(SizeGeometry {
                width: Some(w),
                height: None,
            }) => settings.edit_dimension_value(Dimension::Width, i64::from(w)),
            Some(SizeGeometry {
                width: None,
                height: Some(h),
            }) => settings.edit_dimension_value(Dimension::Height, i64::from(h)),
            _ => {}
        }
        settings
    }

    fn output_locations(&self) -> Result<Vec<Location>, GrayError> {
        if self.input_files.len() == 1 {
            return Ok(vec![self.output.clone()]);
        }
        // several previews can only go to a directory
        let Location::Path(dir) = &self.output else {
            return Err(wg_err!("cannot write several previews to standard output"));
        };
        let mut seen = HashSet::new();
        let mut locations = Vec::with_capacity(self.input_files.len());
        for input in &self.input_files {
            let name = grayscale_file_name(input, ".png");
            if !seen.insert(name.clone()) {
                return Err(wg_err!(
                    "several input files would be written to {}",
                    dir.join(&name).display()
                ));
            }
            locations.push(Location::Path(dir.join(name)));
        }
        Ok(locations)
    }
}

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::{GlobError, PatternError};
use image::{ImageError, ImageFormat, RgbaImage};
use lib_drcs::constants::OUTPUT_EXT;
use lib_drcs::DrcsError;
use log::{debug, error, info, warn};
use thiserror::Error;

use crate::args::CmdOptions;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: DrcsError },

    #[error("Invalid input pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Unreadable input path: {0}")]
    Glob(#[from] GlobError),

    #[error("Decoded buffer does not fill a {width}x{height} image")]
    BufferSize { width: u32, height: u32 },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

/// Expands `pattern` into the matching paths, sorted.
pub fn resolve_inputs(pattern: &str) -> Result<Vec<PathBuf>, ConvertError> {
    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// `<output_dir>/<input stem>.png`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(OUTPUT_EXT);
    output_dir.join(name)
}

pub fn convert_single_file(input: &Path, output: &Path) -> Result<(u32, u32), ConvertError> {
    let data = fs::read(input)?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let decoded = lib_drcs::decode(&data).map_err(|source| ConvertError::Decode {
        path: input.to_path_buf(),
        source,
    })?;
    let (width, height) = decoded.dimensions();
    debug!("Decoded {}x{} image", width, height);

    let image = RgbaImage::from_raw(width, height, decoded.into_rgba())
        .ok_or(ConvertError::BufferSize { width, height })?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    image.save_with_format(output, ImageFormat::Png)?;

    Ok((width, height))
}

/// Converts every input matched by the options.
///
/// A failing file is logged and counted. Unless `fail_fast` is set, the
/// remaining files are still converted.
pub fn convert_all(options: &CmdOptions) -> Result<Summary, ConvertError> {
    let inputs = resolve_inputs(&options.input)?;
    if inputs.is_empty() {
        warn!("No files match {}", options.input);
    }
    debug!("Resolved {} input file(s)", inputs.len());

    let mut summary = Summary::default();
    for input in inputs {
        let output = output_path_for(&input, &options.output);

        match convert_single_file(&input, &output) {
            Ok(_) => {
                info!("[OK] {} -> {}", input.display(), output.display());
                summary.converted += 1;
            }
            Err(err) => {
                error!("[FAILED] {}: {}", input.display(), err);
                summary.failed += 1;
                if options.fail_fast {
                    break;
                }
            }
        }
    }

    Ok(summary)
}

//! PNG export of rendered images

use crate::io::error::{Result, SpotError};
use image::RgbaImage;
use std::path::Path;

/// Write `img` to `output_path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The image has no pixels
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(crate::io::error::invalid_parameter(
            "image",
            &format!("{}x{}", img.width(), img.height()),
            &"rendered image is empty",
        ));
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SpotError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| SpotError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), "exported image");
    Ok(())
}

//! 食事画像の添付
//!
//! jpg/jpeg/png のみ受け付ける。ログにはファイル名だけを記録する。

use crate::error::{MealLogError, Result};
use image::ImageFormat;
use std::path::Path;

/// 受け付ける拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 添付画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// 添付画像を検証してファイル名を取り出す
pub fn attach_image(path: &Path) -> Result<Attachment> {
    if !path.is_file() {
        return Err(MealLogError::FileNotFound(path.display().to_string()));
    }

    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) | Ok(ImageFormat::Png) => {}
        _ => return Err(MealLogError::UnsupportedImage(path.display().to_string())),
    }

    let (width, height) = image::image_dimensions(path)
        .map_err(|e| MealLogError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| MealLogError::FileNotFound(path.display().to_string()))?;

    tracing::debug!(file = %file_name, width, height, "image attached");
    Ok(Attachment { file_name, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// 1x1 の PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x60,
        0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7A, 0x5E, 0xAB, 0x3F, 0x00, 0x00, 0x00, 0x00,
        0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_attach_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lunch.png");
        std::fs::write(&path, TINY_PNG).unwrap();

        let attachment = attach_image(&path).unwrap();
        assert_eq!(attachment.file_name, "lunch.png");
        assert_eq!((attachment.width, attachment.height), (1, 1));
    }

    #[test]
    fn test_missing_file() {
        let result = attach_image(Path::new("/nonexistent/12345/lunch.jpg"));
        assert!(matches!(result, Err(MealLogError::FileNotFound(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lunch.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        assert!(matches!(attach_image(&path), Err(MealLogError::UnsupportedImage(_))));
    }

    #[test]
    fn test_broken_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lunch.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        assert!(matches!(attach_image(&path), Err(MealLogError::ImageLoad(_))));
    }
}

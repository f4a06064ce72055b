//! File name helpers for path strings of either separator convention.
//!
//! Paths are treated as opaque text: nothing here touches the filesystem or
//! checks that a path is valid for the current platform. Both `/` and `\`
//! count as separators wherever they appear, so `C:\styles/site.less` and
//! `/styles\site.less` both have the name `site.less`.

use crate::errors::{require, Result};

pub const UNIX_SEPARATOR: char = '/';
pub const WINDOWS_SEPARATOR: char = '\\';
pub const EXTENSION_SEPARATOR: char = '.';

/// Index of the rightmost separator of either kind
fn last_separator(path: &str) -> Option<usize> {
    path.rfind(UNIX_SEPARATOR)
        .max(path.rfind(WINDOWS_SEPARATOR))
}

fn name_of(path: &str) -> &str {
    match last_separator(path) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Index of the extension dot inside the last path segment, if any
fn extension_dot(path: &str) -> Option<usize> {
    let dot = path.rfind(EXTENSION_SEPARATOR)?;
    match last_separator(path) {
        Some(separator) if separator > dot => None,
        _ => Some(dot),
    }
}

/// Get the file name: everything after the last separator.
///
/// A path without separators is returned unchanged.
pub fn name(path: Option<&str>) -> Result<&str> {
    let path = require(path, "path")?;
    Ok(name_of(path))
}

/// Get the extension of the file name, without the dot.
///
/// Dots in directory segments are ignored, and only the rightmost dot of
/// the name counts, so `archive.tar.gz` has the extension `gz`. Returns an
/// empty string when the name has no dot.
pub fn extension(path: Option<&str>) -> Result<&str> {
    let path = require(path, "path")?;
    Ok(match extension_dot(path) {
        Some(dot) => &path[dot + 1..],
        None => "",
    })
}

/// Get the file name without its extension
pub fn base_name(path: Option<&str>) -> Result<&str> {
    let path = require(path, "path")?;
    let name = name_of(path);
    Ok(match name.rfind(EXTENSION_SEPARATOR) {
        Some(dot) => &name[..dot],
        None => name,
    })
}

/// Replace the extension of the file name, or append one if there is none.
///
/// A leading dot in `extension` is optional. An empty `extension` strips
/// the current one, dot included.
pub fn replace_extension(
    path: Option<&str>,
    extension: Option<&str>,
) -> Result<String> {
    let path = require(path, "path")?;
    let extension = require(extension, "extension")?
        .trim_start_matches(EXTENSION_SEPARATOR);

    let stem = match extension_dot(path) {
        Some(dot) => &path[..dot],
        None => path,
    };
    if extension.is_empty() {
        return Ok(stem.to_string());
    }
    Ok(format!("{stem}{EXTENSION_SEPARATOR}{extension}"))
}

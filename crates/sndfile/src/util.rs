//! Helpers for moving strings across the C boundary.
use core::ffi::c_char;
use std::{ffi::CStr, path::Path};

use crate::{SfResult, SndfileError};

#[cfg(unix)]
pub(crate) fn cstring_from_path(path: &Path) -> SfResult<std::ffi::CString> {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::CString::new(path.as_os_str().as_bytes())
        .map_err(|_| SndfileError::InvalidArgument("path contains an interior NUL byte"))
}

#[cfg(not(unix))]
pub(crate) fn cstring_from_path(path: &Path) -> SfResult<std::ffi::CString> {
    let path = path
        .to_str()
        .ok_or(SndfileError::InvalidArgument("path is not valid UTF-8"))?;
    std::ffi::CString::new(path)
        .map_err(|_| SndfileError::InvalidArgument("path contains an interior NUL byte"))
}

/// Copies a C string owned by libsndfile. Null becomes `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL terminated string.
pub(crate) unsafe fn string_from_ptr(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Reads a fixed-width char field. The field is NUL padded but need not be
/// NUL terminated when the text fills it.
pub(crate) fn read_fixed(field: &[c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .map(|&c| c as u8)
        .take_while(|&b| b != 0)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Writes `text` into a fixed-width char field, truncating silently and
/// padding the remainder with NUL.
pub(crate) fn write_fixed(field: &mut [c_char], text: &[u8]) {
    let len = text.len().min(field.len());
    for (dst, &src) in field.iter_mut().zip(&text[..len]) {
        *dst = src as c_char;
    }
    for dst in &mut field[len..] {
        *dst = 0;
    }
}

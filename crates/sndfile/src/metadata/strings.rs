//! String tags such as title, artist and comment.
use core::ffi::c_int;
use std::ffi::CString;

use sndfile_sys::ffi as sys;

use crate::{file::SndFile, util, SfError, SfResult, SndfileError};

/// Identifies a string tag.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringType {
    Title = sys::SF_STR_TITLE as i32,
    Copyright = sys::SF_STR_COPYRIGHT as i32,
    Software = sys::SF_STR_SOFTWARE as i32,
    Artist = sys::SF_STR_ARTIST as i32,
    Comment = sys::SF_STR_COMMENT as i32,
    Date = sys::SF_STR_DATE as i32,
    Album = sys::SF_STR_ALBUM as i32,
    License = sys::SF_STR_LICENSE as i32,
    TrackNumber = sys::SF_STR_TRACKNUMBER as i32,
    Genre = sys::SF_STR_GENRE as i32,
}

impl StringType {
    pub const FIRST: Self = StringType::Title;
    pub const LAST: Self = StringType::Genre;

    pub const ALL: [StringType; 10] = [
        StringType::Title,
        StringType::Copyright,
        StringType::Software,
        StringType::Artist,
        StringType::Comment,
        StringType::Date,
        StringType::Album,
        StringType::License,
        StringType::TrackNumber,
        StringType::Genre,
    ];

    pub fn iter() -> impl Iterator<Item = StringType> {
        Self::ALL.into_iter()
    }
}

impl From<StringType> for c_int {
    fn from(value: StringType) -> Self {
        value as c_int
    }
}

impl SndFile<'_> {
    /// The tag's value, or `None` if the file does not carry it.
    pub fn string(&self, kind: StringType) -> SfResult<Option<String>> {
        let ptr = self.as_ptr()?;
        Ok(unsafe { util::string_from_ptr(sys::sf_get_string(ptr, kind.into())) })
    }

    /// Sets a tag. Most formats only accept tags before the first write.
    pub fn set_string(&mut self, kind: StringType, value: &str) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        let value = CString::new(value)
            .map_err(|_| SndfileError::InvalidArgument("string contains an interior NUL byte"))?;
        let res = unsafe { sys::sf_set_string(ptr, kind.into(), value.as_ptr()) };
        let code = SfError(res);
        if code.is_error() {
            return Err(SndfileError::Command {
                command: "sf_set_string",
                message: code.description(),
            });
        }
        Ok(())
    }
}

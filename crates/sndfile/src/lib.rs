//! `sndfile` is a safe wrapper around libsndfile, the C library for reading
//! and writing sampled sound files (WAV, AIFF, FLAC, Ogg/Vorbis, CAF, RF64 and
//! many more).
//!
//! Everything that touches the file contents is done by libsndfile itself.
//! This crate marshals types across the boundary, keeps the native handle
//! alive for exactly as long as it is valid, and turns native failure codes
//! into [`SndfileError`] values carrying the library's own diagnostic text.
//!
//! The central type is [`SndFile`], an open sound stream. It can be opened
//! from a path, from a file descriptor (unix), or from any in-process source
//! or sink implementing [`VirtualIo`]:
//!
//! ```no_run
//! use sndfile::{Format, Info, Mode, SndFile};
//!
//! # fn main() -> sndfile::SfResult<()> {
//! let mut info = Info::new(44_100, 2, Format::WAV | Format::PCM_16);
//! let mut out = SndFile::open("out.wav", Mode::Write, &mut info)?;
//! out.write_frames(&[0.25_f32, -0.25, 0.5, -0.5])?;
//! out.close()?;
//!
//! let mut info = Info::default();
//! let mut input = SndFile::open("out.wav", Mode::Read, &mut info)?;
//! let mut frames = vec![0_i16; 4];
//! let read = input.read_frames(&mut frames)?;
//! assert_eq!(read, 2);
//! # Ok(())
//! # }
//! ```
//!
//! Sample buffers may be `i16`, `i32`, `f32` or `f64` slices regardless of the
//! encoding of the file; libsndfile converts on the fly.
//!
//! # Threading
//!
//! A [`SndFile`] may be moved between threads but every operation takes
//! `&mut self`: one handle, one caller at a time. This mirrors libsndfile's
//! own contract. Virtual I/O callbacks run synchronously on the thread that
//! made the triggering call.
//!
//! # Feature flags
//!
//! ## `generate-bindings`
//! Generates the raw declarations at build time using `bindgen` against the
//! system `sndfile.h`.
//!
//! - Intended for maintainers when checking the declarations against a new libsndfile.
//! - Regular users should prefer the pre-generated bindings shipped with `sndfile-sys`.
//! - Adds a build dependency on clang/libclang via `bindgen`.
use core::ffi::c_int;
use std::ffi::CStr;

pub mod command;
pub mod file;
pub mod format;
pub mod metadata;
pub mod samples;
mod util;
pub mod virtual_io;

#[cfg(test)]
pub(crate) mod test_assets;

#[doc(hidden)]
pub extern crate sndfile_sys;

use sndfile_sys::ffi as sys;

pub use command::{lib_version, Ambisonic, EmbedFileInfo, FormatInfo};
pub use file::SndFile;
pub use format::{format_check, Format, Info, Mode, Whence};
pub use metadata::{
    broadcast::BroadcastInfo,
    channel_map::ChannelPosition,
    instrument::{Instrument, Loop, LoopMode},
    loop_info::LoopInfo,
    strings::StringType,
};
pub use samples::{Sample, SampleKind, Samples, SamplesMut};
pub use virtual_io::{Callbacks, ReadStream, Stream, VirtualIo};

/// Conversion between a wrapper value and the plain C record it mirrors.
pub(crate) trait Binding: Sized {
    type Raw;

    /// Construct the wrapper from the native record.
    fn from_raw(raw: &Self::Raw) -> Self;

    fn to_raw(&self) -> Self::Raw;
}

/// A native libsndfile error number, as returned by `sf_error` and `sf_close`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SfError(pub c_int);

impl SfError {
    pub const NO_ERROR: SfError = SfError(sys::SF_ERR_NO_ERROR as c_int);

    pub fn name(self) -> &'static str {
        match self.0 as u32 {
            sys::SF_ERR_NO_ERROR => "NoError",
            sys::SF_ERR_UNRECOGNISED_FORMAT => "UnrecognisedFormat",
            sys::SF_ERR_SYSTEM => "System",
            sys::SF_ERR_MALFORMED_FILE => "MalformedFile",
            sys::SF_ERR_UNSUPPORTED_ENCODING => "UnsupportedEncoding",
            _ => "Internal",
        }
    }

    /// The library's description of this error number.
    pub fn description(self) -> String {
        let text = unsafe { sys::sf_error_number(self.0) };
        if text.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(text) }
            .to_string_lossy()
            .into_owned()
    }

    pub fn is_error(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for SfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SfError: {} ({})", self.name(), self.0)
    }
}

impl std::fmt::Debug for SfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SfError({}, {})", self.name(), self.0)
    }
}

/// Every failure reported by this crate.
///
/// Errors that originate in libsndfile carry the text of the native
/// last-error query, taken while the stream was still valid.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SndfileError {
    /// The native open returned no stream.
    #[error("failed to open sound file: {message} ({code})")]
    OpenFailed { code: SfError, message: String },
    /// A read returned a negative count, or a write transferred fewer items than requested.
    #[error("sample transfer failed: {message}")]
    TransferError { message: String },
    /// The call was rejected before reaching libsndfile.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The handle was used after [`SndFile::close`].
    #[error("sound file handle is closed")]
    ClosedHandle,
    /// [`SndFile::close`] was called a second time.
    #[error("sound file handle was already closed")]
    AlreadyClosed,
    /// A seek or `sf_command` request reported failure.
    #[error("{command} failed: {message}")]
    Command {
        command: &'static str,
        message: String,
    },
    /// The native close reported an error. Resources are released regardless.
    #[error("failed to close sound file: {message} ({code})")]
    CloseFailed { code: SfError, message: String },
}

pub type SfResult<T> = std::result::Result<T, SndfileError>;

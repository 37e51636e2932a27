//! The open sound stream handle.
use std::{marker::PhantomData, path::Path, ptr::NonNull};

use sndfile_sys::ffi as sys;

use crate::{
    format::{Info, Mode, Whence},
    virtual_io::VirtualBridge,
    Binding, SfError, SfResult, SndfileError,
};

/// An open libsndfile stream.
///
/// Created by [`SndFile::open`], [`SndFile::open_fd`] or
/// [`SndFile::open_virtual`]. The lifetime `'io` covers whatever the stream
/// borrows: a borrowed descriptor or a virtual I/O object holding references.
/// Streams opened from a path or an owned descriptor are `SndFile<'static>`.
///
/// Call [`SndFile::close`] when done. It reports the native close status.
/// Dropping an open handle also closes it, but any error is lost and a
/// warning is logged.
pub struct SndFile<'io> {
    inner: Option<NonNull<sys::SNDFILE>>,
    info: Info,
    mode: Mode,
    // Read by libsndfile through the user-data pointer until sf_close returns.
    bridge: Option<NonNull<VirtualBridge<'io>>>,
    _io: PhantomData<&'io mut ()>,
}

// libsndfile streams carry no thread affinity. Every call goes through
// `&mut self`, and the virtual I/O object is required to be `Send`.
unsafe impl Send for SndFile<'_> {}

impl SndFile<'static> {
    /// Opens the file at `path`.
    ///
    /// For [`Mode::Read`] `info` may be zeroed, except for RAW files where
    /// sample rate, channels and format must be set. For writing, `info`
    /// describes the file to create. On success `info` holds the values
    /// libsndfile settled on.
    pub fn open<P: AsRef<Path>>(path: P, mode: Mode, info: &mut Info) -> SfResult<Self> {
        let path = path.as_ref();
        let c_path = crate::util::cstring_from_path(path)?;
        let mut raw = info.to_raw();
        let ptr = unsafe { sys::sf_open(c_path.as_ptr(), mode.into(), &mut raw) };
        let file = Self::from_open_result(ptr, raw, mode, None)?;
        tracing::debug!(path = %path.display(), ?mode, "opened sound file");
        *info = file.info;
        Ok(file)
    }

    /// Opens a stream over a file descriptor the caller hands over.
    ///
    /// The descriptor is closed by [`SndFile::close`], or immediately if the
    /// open fails.
    #[cfg(unix)]
    pub fn open_fd(fd: std::os::fd::OwnedFd, mode: Mode, info: &mut Info) -> SfResult<Self> {
        use std::os::fd::IntoRawFd;
        let raw_fd = fd.into_raw_fd();
        let mut raw = info.to_raw();
        let ptr = unsafe { sys::sf_open_fd(raw_fd, mode.into(), &mut raw, sys::SF_TRUE as i32) };
        let file = Self::from_open_result(ptr, raw, mode, None)?;
        tracing::debug!(fd = raw_fd, ?mode, "opened sound file from descriptor");
        *info = file.info;
        Ok(file)
    }
}

impl<'io> SndFile<'io> {
    /// Opens a stream over a descriptor that stays owned by the caller.
    ///
    /// The descriptor is left open when the stream closes.
    #[cfg(unix)]
    pub fn open_borrowed_fd(
        fd: std::os::fd::BorrowedFd<'io>,
        mode: Mode,
        info: &mut Info,
    ) -> SfResult<Self> {
        use std::os::fd::AsRawFd;
        let raw_fd = fd.as_raw_fd();
        let mut raw = info.to_raw();
        let ptr = unsafe { sys::sf_open_fd(raw_fd, mode.into(), &mut raw, sys::SF_FALSE as i32) };
        let file = Self::from_open_result(ptr, raw, mode, None)?;
        tracing::debug!(fd = raw_fd, ?mode, "opened sound file from borrowed descriptor");
        *info = file.info;
        Ok(file)
    }

    /// Wraps the result of a native open. On failure the bridge, if any, is
    /// reclaimed here.
    pub(crate) fn from_open_result(
        ptr: *mut sys::SNDFILE,
        raw: sys::SF_INFO,
        mode: Mode,
        bridge: Option<NonNull<VirtualBridge<'io>>>,
    ) -> SfResult<Self> {
        let Some(inner) = NonNull::new(ptr) else {
            // With a null stream these report the failure of the last open.
            let code = SfError(unsafe { sys::sf_error(core::ptr::null_mut()) });
            let message = sndfile_ffi::error_text(core::ptr::null_mut());
            if let Some(bridge) = bridge {
                unsafe { VirtualBridge::release(bridge) };
            }
            tracing::debug!(%code, %message, "sound file open failed");
            return Err(SndfileError::OpenFailed { code, message });
        };
        Ok(Self {
            inner: Some(inner),
            info: Info::from_raw(&raw),
            mode,
            bridge,
            _io: PhantomData,
        })
    }

    /// The native stream, or `ClosedHandle` after [`SndFile::close`].
    #[inline]
    pub(crate) fn as_ptr(&self) -> SfResult<*mut sys::SNDFILE> {
        self.inner
            .map(NonNull::as_ptr)
            .ok_or(SndfileError::ClosedHandle)
    }

    /// The descriptor captured when the stream was opened.
    ///
    /// `frames` is not updated by writes, use
    /// [`current_info`](SndFile::current_info) for that.
    pub fn info(&self) -> &Info {
        &self.info
    }

    pub(crate) fn set_info(&mut self, info: Info) {
        self.info = info;
    }

    pub fn channels(&self) -> i32 {
        self.info.channels
    }

    pub fn frames(&self) -> i64 {
        self.info.frames
    }

    pub fn sample_rate(&self) -> i32 {
        self.info.sample_rate
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Moves the read/write position, counted in frames.
    ///
    /// Returns the new offset from the start of the audio data.
    pub fn seek(&mut self, frames: i64, whence: Whence) -> SfResult<i64> {
        let ptr = self.as_ptr()?;
        let pos = unsafe { sys::sf_seek(ptr, frames, whence.into()) };
        if pos < 0 {
            return Err(SndfileError::Command {
                command: "sf_seek",
                message: sndfile_ffi::error_text(ptr),
            });
        }
        Ok(pos)
    }

    /// Forces pending writes and the header update to disk.
    pub fn write_sync(&mut self) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        unsafe { sys::sf_write_sync(ptr) };
        Ok(())
    }

    /// The stream's last native error number.
    pub fn error_code(&self) -> SfResult<SfError> {
        let ptr = self.as_ptr()?;
        Ok(SfError(unsafe { sys::sf_error(ptr) }))
    }

    /// The stream's last native error as text.
    pub fn error_text(&self) -> SfResult<String> {
        let ptr = self.as_ptr()?;
        Ok(sndfile_ffi::error_text(ptr))
    }

    /// Closes the stream.
    ///
    /// Every resource is released even when libsndfile reports a failure.
    /// Returns `AlreadyClosed` when called again.
    pub fn close(&mut self) -> SfResult<()> {
        let Some(inner) = self.inner.take() else {
            return Err(SndfileError::AlreadyClosed);
        };
        let res = unsafe { sys::sf_close(inner.as_ptr()) };
        // Native no longer calls back into the bridge once sf_close returns.
        if let Some(bridge) = self.bridge.take() {
            unsafe { VirtualBridge::release(bridge) };
        }
        tracing::debug!(result = res, "closed sound file");
        let code = SfError(res);
        if code.is_error() {
            return Err(SndfileError::CloseFailed {
                code,
                message: code.description(),
            });
        }
        Ok(())
    }
}

impl Drop for SndFile<'_> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            tracing::warn!("sound file dropped without close(), closing it now");
            let _ = self.close();
        }
    }
}

impl std::fmt::Debug for SndFile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SndFile")
            .field("info", &self.info)
            .field("mode", &self.mode)
            .field("virtual_io", &self.bridge.is_some())
            .field("closed", &self.is_closed())
            .finish()
    }
}

pub(crate) mod sndfile_ffi {
    use sndfile_sys::ffi as sys;

    /// Text of the last error on `ptr`, or of the last failed open when `ptr` is null.
    #[inline]
    pub fn error_text(ptr: *mut sys::SNDFILE) -> String {
        unsafe { crate::util::string_from_ptr(sys::sf_strerror(ptr)) }.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format::Format, test_assets::temp_file::TempPath};

    fn write_pcm16(path: &TempPath, channels: i32, data: &[i16]) {
        let mut info = Info::new(44_100, channels, Format::WAV | Format::PCM_16);
        let mut file = SndFile::open(path, Mode::Write, &mut info).unwrap();
        assert_eq!(file.write_items(data).unwrap(), data.len());
        file.close().unwrap();
    }

    #[test]
    fn test_open_missing_file_reports_native_text() {
        let path = TempPath::new("missing.wav");
        let mut info = Info::default();
        let err = SndFile::open(&path, Mode::Read, &mut info).unwrap_err();
        match err {
            SndfileError::OpenFailed { code, message } => {
                assert!(code.is_error());
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_rejects_nul_in_path() {
        let mut info = Info::default();
        let err = SndFile::open("bad\0.wav", Mode::Read, &mut info).unwrap_err();
        assert!(matches!(err, SndfileError::InvalidArgument(_)));
    }

    #[test]
    fn test_open_populates_info() {
        let path = TempPath::new("populate.wav");
        write_pcm16(&path, 2, &[1, 2, 3, 4, 5, 6]);

        let mut info = Info::default();
        let file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.frames, 3);
        assert_eq!(info.sample_rate, 44_100);
        assert_eq!(info.format, Format::WAV | Format::PCM_16);
        assert!(info.seekable);
        assert_eq!(file.info(), &info);
        assert_eq!(file.mode(), Mode::Read);
    }

    #[test]
    fn test_close_twice_and_use_after_close() {
        let path = TempPath::new("close_twice.wav");
        write_pcm16(&path, 1, &[7; 16]);

        let mut info = Info::default();
        let mut file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        file.close().unwrap();
        assert!(file.is_closed());
        assert!(matches!(file.close(), Err(SndfileError::AlreadyClosed)));
        assert!(matches!(
            file.seek(0, Whence::Start),
            Err(SndfileError::ClosedHandle)
        ));
        let mut buf = [0_i16; 4];
        assert!(matches!(
            file.read_items(&mut buf),
            Err(SndfileError::ClosedHandle)
        ));
        assert!(matches!(file.error_text(), Err(SndfileError::ClosedHandle)));
    }

    #[test]
    fn test_seek_counts_frames() {
        let path = TempPath::new("seek.wav");
        write_pcm16(&path, 2, &[0, 0, 1, 1, 2, 2, 3, 3]);

        let mut info = Info::default();
        let mut file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(file.seek(2, Whence::Start).unwrap(), 2);
        let mut frame = [0_i16; 2];
        assert_eq!(file.read_frames(&mut frame).unwrap(), 1);
        assert_eq!(frame, [2, 2]);
        assert_eq!(file.seek(-1, Whence::End).unwrap(), 3);
        assert_eq!(file.seek(0, Whence::Current).unwrap(), 3);

        let err = file.seek(100, Whence::Start).unwrap_err();
        assert!(matches!(err, SndfileError::Command { command: "sf_seek", .. }));
        file.close().unwrap();
    }

    #[test]
    fn test_drop_without_close_releases_handle() {
        let path = TempPath::new("dropped.wav");
        {
            let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
            let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
            file.write_items(&[1_i16, 2, 3]).unwrap();
        }
        // The header was finalised by the implicit close.
        let mut info = Info::default();
        let mut file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(info.frames, 3);
        file.close().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_open_fd_owned_and_borrowed() {
        use std::os::fd::{AsFd, OwnedFd};

        let path = TempPath::new("fd.wav");
        let out = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .unwrap();
        let mut info = Info::new(22_050, 1, Format::WAV | Format::PCM_16);
        let mut file = SndFile::open_fd(OwnedFd::from(out), Mode::Write, &mut info).unwrap();
        file.write_items(&[10_i16, 20, 30, 40]).unwrap();
        file.close().unwrap();

        let input = std::fs::File::open(&path).unwrap();
        let mut info = Info::default();
        let mut file = SndFile::open_borrowed_fd(input.as_fd(), Mode::Read, &mut info).unwrap();
        assert_eq!(info.frames, 4);
        let mut buf = [0_i16; 4];
        assert_eq!(file.read_items(&mut buf).unwrap(), 4);
        assert_eq!(buf, [10, 20, 30, 40]);
        file.close().unwrap();

        // Still ours after the stream closed.
        assert!(input.metadata().is_ok());
    }
}

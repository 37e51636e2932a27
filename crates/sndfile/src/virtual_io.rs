//! Streams backed by caller supplied I/O instead of a file.
//!
//! libsndfile drives the I/O itself: it calls back into the [`VirtualIo`]
//! object whenever it needs bytes, a position or the total length. Every
//! callback returns an `i64` in the native convention, a count or offset on
//! success and a negative value on failure.
//!
//! Three implementations ship with the crate:
//!
//! - [`ReadStream`] wraps any `Read + Seek` source, for decoding only.
//! - [`Stream`] wraps any `Read + Write + Seek` value, e.g. a
//!   `Cursor<Vec<u8>>` to encode into memory.
//! - [`Callbacks`] bundles five plain functions with a user data value.
//!
//! ```no_run
//! use std::io::Cursor;
//! use sndfile::{Format, Info, Mode, SndFile, Stream};
//!
//! # fn main() -> sndfile::SfResult<()> {
//! let mut buffer = Cursor::new(Vec::new());
//! let mut info = Info::new(48_000, 1, Format::WAV | Format::FLOAT);
//! let mut file = SndFile::open_virtual(Stream::new(&mut buffer), Mode::Write, &mut info)?;
//! file.write_items(&[0.0_f32, 0.5, -0.5])?;
//! file.close()?;
//! drop(file);
//! assert!(!buffer.get_ref().is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Callbacks have no way to report a structured error. A failing or
//! panicking callback returns a negative value and libsndfile surfaces the
//! failure through the next public call's error text.
use core::ffi::{c_int, c_void};
use std::{
    io::{self, Read, Seek, SeekFrom, Write},
    panic::{self, AssertUnwindSafe},
    ptr::NonNull,
};

use sndfile_sys::ffi as sys;

use crate::{
    file::SndFile,
    format::{Info, Mode, Whence},
    Binding, SfResult,
};

/// Byte level access for a virtual stream.
///
/// Offsets and counts are in bytes. Return a negative value to signal failure.
pub trait VirtualIo {
    /// Total length of the stream.
    fn get_length(&mut self) -> i64;

    /// Moves the position and returns the new offset from the start.
    fn seek(&mut self, offset: i64, whence: Whence) -> i64;

    /// Fills `buf` as far as possible. Returns the number of bytes read, 0 at the end.
    fn read(&mut self, buf: &mut [u8]) -> i64;

    /// Returns the number of bytes written.
    fn write(&mut self, buf: &[u8]) -> i64;

    /// Current position.
    fn tell(&mut self) -> i64;
}

impl<V: VirtualIo + ?Sized> VirtualIo for &mut V {
    fn get_length(&mut self) -> i64 {
        (**self).get_length()
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        (**self).seek(offset, whence)
    }

    fn read(&mut self, buf: &mut [u8]) -> i64 {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> i64 {
        (**self).write(buf)
    }

    fn tell(&mut self) -> i64 {
        (**self).tell()
    }
}

impl<V: VirtualIo + ?Sized> VirtualIo for Box<V> {
    fn get_length(&mut self) -> i64 {
        (**self).get_length()
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        (**self).seek(offset, whence)
    }

    fn read(&mut self, buf: &mut [u8]) -> i64 {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> i64 {
        (**self).write(buf)
    }

    fn tell(&mut self) -> i64 {
        (**self).tell()
    }
}

/// Five plain functions sharing one user data value.
///
/// ```
/// use sndfile::{Callbacks, VirtualIo, Whence};
///
/// struct Silence {
///     pos: i64,
/// }
///
/// let mut io = Callbacks {
///     user_data: Silence { pos: 0 },
///     get_length: |_| 1024,
///     seek: |offset, whence, s: &mut Silence| {
///         s.pos = match whence {
///             Whence::Start => offset,
///             Whence::Current => s.pos + offset,
///             Whence::End => 1024 + offset,
///         };
///         s.pos
///     },
///     read: |buf, s| {
///         let n = buf.len().min((1024 - s.pos) as usize);
///         buf[..n].fill(0);
///         s.pos += n as i64;
///         n as i64
///     },
///     write: |_, _| 0,
///     tell: |s| s.pos,
/// };
/// assert_eq!(io.seek(-24, Whence::End), 1000);
/// ```
pub struct Callbacks<U> {
    pub get_length: fn(&mut U) -> i64,
    pub seek: fn(i64, Whence, &mut U) -> i64,
    pub read: fn(&mut [u8], &mut U) -> i64,
    pub write: fn(&[u8], &mut U) -> i64,
    pub tell: fn(&mut U) -> i64,
    pub user_data: U,
}

impl<U> Callbacks<U> {
    pub fn into_user_data(self) -> U {
        self.user_data
    }
}

impl<U> VirtualIo for Callbacks<U> {
    fn get_length(&mut self) -> i64 {
        (self.get_length)(&mut self.user_data)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        (self.seek)(offset, whence, &mut self.user_data)
    }

    fn read(&mut self, buf: &mut [u8]) -> i64 {
        (self.read)(buf, &mut self.user_data)
    }

    fn write(&mut self, buf: &[u8]) -> i64 {
        (self.write)(buf, &mut self.user_data)
    }

    fn tell(&mut self) -> i64 {
        (self.tell)(&mut self.user_data)
    }
}

/// Read-only virtual I/O over a `Read + Seek` source. Writes report 0 bytes.
#[derive(Debug)]
pub struct ReadStream<R> {
    inner: R,
}

impl<R: Read + Seek> ReadStream<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> VirtualIo for ReadStream<R> {
    fn get_length(&mut self) -> i64 {
        or_sentinel("get_length", stream_length(&mut self.inner))
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        or_sentinel("seek", seek_to(&mut self.inner, offset, whence))
    }

    fn read(&mut self, buf: &mut [u8]) -> i64 {
        or_sentinel("read", fill(&mut self.inner, buf))
    }

    fn write(&mut self, _buf: &[u8]) -> i64 {
        0
    }

    fn tell(&mut self) -> i64 {
        or_sentinel("tell", self.inner.stream_position().map(|p| p as i64))
    }
}

/// Read/write virtual I/O over a `Read + Write + Seek` value.
#[derive(Debug)]
pub struct Stream<T> {
    inner: T,
}

impl<T: Read + Write + Seek> Stream<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + Seek> VirtualIo for Stream<T> {
    fn get_length(&mut self) -> i64 {
        or_sentinel("get_length", stream_length(&mut self.inner))
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> i64 {
        or_sentinel("seek", seek_to(&mut self.inner, offset, whence))
    }

    fn read(&mut self, buf: &mut [u8]) -> i64 {
        or_sentinel("read", fill(&mut self.inner, buf))
    }

    fn write(&mut self, buf: &[u8]) -> i64 {
        or_sentinel("write", self.inner.write_all(buf).map(|()| buf.len() as i64))
    }

    fn tell(&mut self) -> i64 {
        or_sentinel("tell", self.inner.stream_position().map(|p| p as i64))
    }
}

fn or_sentinel(op: &'static str, res: io::Result<i64>) -> i64 {
    match res {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(op, error = %e, "virtual io operation failed");
            -1
        }
    }
}

fn stream_length<S: Seek>(s: &mut S) -> io::Result<i64> {
    let pos = s.stream_position()?;
    let end = s.seek(SeekFrom::End(0))?;
    if pos != end {
        s.seek(SeekFrom::Start(pos))?;
    }
    Ok(end as i64)
}

fn seek_to<S: Seek>(s: &mut S, offset: i64, whence: Whence) -> io::Result<i64> {
    let from = match whence {
        Whence::Start => {
            let offset = u64::try_from(offset)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "negative offset"))?;
            SeekFrom::Start(offset)
        }
        Whence::Current => SeekFrom::Current(offset),
        Whence::End => SeekFrom::End(offset),
    };
    s.seek(from).map(|p| p as i64)
}

// libsndfile treats a short read as the end of the stream.
fn fill<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<i64> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled as i64)
}

/// Owned by the `SndFile` and handed to libsndfile as the user data pointer.
pub(crate) struct VirtualBridge<'io> {
    table: sys::SF_VIRTUAL_IO,
    io: Box<dyn VirtualIo + Send + 'io>,
}

impl<'io> VirtualBridge<'io> {
    fn new(io: Box<dyn VirtualIo + Send + 'io>) -> NonNull<Self> {
        let bridge = Box::new(Self {
            table: sys::SF_VIRTUAL_IO {
                get_filelen: Some(vio_get_filelen),
                seek: Some(vio_seek),
                read: Some(vio_read),
                write: Some(vio_write),
                tell: Some(vio_tell),
            },
            io,
        });
        NonNull::from(Box::leak(bridge))
    }

    /// # Safety
    /// `ptr` came from [`VirtualBridge::new`], is released once, and native
    /// code no longer holds it.
    pub(crate) unsafe fn release(ptr: NonNull<Self>) {
        drop(Box::from_raw(ptr.as_ptr()));
    }
}

impl<'io> SndFile<'io> {
    /// Opens a stream whose bytes come from and go to `io`.
    ///
    /// `io` is moved into the handle and dropped when the stream is closed.
    /// Pass `&mut io` to keep ownership; the handle then borrows it until it
    /// is dropped.
    pub fn open_virtual<V>(io: V, mode: Mode, info: &mut Info) -> SfResult<Self>
    where
        V: VirtualIo + Send + 'io,
    {
        let bridge = VirtualBridge::new(Box::new(io));
        let mut raw = info.to_raw();
        let ptr = unsafe {
            sys::sf_open_virtual(
                core::ptr::addr_of_mut!((*bridge.as_ptr()).table),
                mode.into(),
                &mut raw,
                bridge.as_ptr().cast::<c_void>(),
            )
        };
        let file = Self::from_open_result(ptr, raw, mode, Some(bridge))?;
        tracing::debug!(?mode, "opened virtual sound stream");
        *info = *file.info();
        Ok(file)
    }
}

// Lifetimes are erased behind the pointer; the bridge outlives every callback.
fn with_io<F>(user_data: *mut c_void, op: &'static str, f: F) -> sys::sf_count_t
where
    F: FnOnce(&mut (dyn VirtualIo + Send + 'static)) -> i64,
{
    if user_data.is_null() {
        return -1;
    }
    let bridge = unsafe { &mut *user_data.cast::<VirtualBridge<'static>>() };
    match panic::catch_unwind(AssertUnwindSafe(|| f(&mut *bridge.io))) {
        Ok(n) => {
            tracing::trace!(op, result = n, "virtual io callback");
            n
        }
        Err(_) => {
            tracing::error!(op, "virtual io callback panicked");
            -1
        }
    }
}

unsafe extern "C" fn vio_get_filelen(user_data: *mut c_void) -> sys::sf_count_t {
    with_io(user_data, "get_length", |io| io.get_length())
}

unsafe extern "C" fn vio_seek(
    offset: sys::sf_count_t,
    whence: c_int,
    user_data: *mut c_void,
) -> sys::sf_count_t {
    let Ok(whence) = Whence::try_from(whence) else {
        return -1;
    };
    with_io(user_data, "seek", |io| io.seek(offset, whence))
}

unsafe extern "C" fn vio_read(
    ptr: *mut c_void,
    count: sys::sf_count_t,
    user_data: *mut c_void,
) -> sys::sf_count_t {
    if count <= 0 {
        return 0;
    }
    if ptr.is_null() {
        return -1;
    }
    let buf = std::slice::from_raw_parts_mut(ptr.cast::<u8>(), count as usize);
    with_io(user_data, "read", |io| io.read(buf))
}

unsafe extern "C" fn vio_write(
    ptr: *const c_void,
    count: sys::sf_count_t,
    user_data: *mut c_void,
) -> sys::sf_count_t {
    if count <= 0 {
        return 0;
    }
    if ptr.is_null() {
        return -1;
    }
    let buf = std::slice::from_raw_parts(ptr.cast::<u8>(), count as usize);
    with_io(user_data, "write", |io| io.write(buf))
}

unsafe extern "C" fn vio_tell(user_data: *mut c_void) -> sys::sf_count_t {
    with_io(user_data, "tell", |io| io.tell())
}

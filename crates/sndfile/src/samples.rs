//! Typed sample transfer between Rust slices and an open stream.
//!
//! libsndfile converts between the file's encoding and four in-memory
//! sample types: `i16`, `i32`, `f32` and `f64`. A buffer of any of them can
//! be passed to the generic methods on [`SndFile`]; no other element type
//! implements [`Sample`].
//!
//! Reads and writes come in two flavours:
//!
//! - *items* count individual samples regardless of channel layout,
//! - *frames* count one sample per channel, so a buffer of `len` items holds
//!   `len / channels` frames. Leftover items past the last whole frame are
//!   never touched.
use sndfile_sys::ffi as sys;

use crate::{file::SndFile, SfResult, SndfileError};

mod private {
    pub trait Sealed {}
}

/// The sample kind libsndfile converts to and from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    I16,
    I32,
    F32,
    F64,
}

/// An element type usable in a sample buffer.
///
/// Sealed: implemented for `i16`, `i32`, `f32` and `f64` only.
pub trait Sample: private::Sealed + Copy + Default + 'static {
    fn samples(buf: &[Self]) -> Samples<'_>;

    fn samples_mut(buf: &mut [Self]) -> SamplesMut<'_>;
}

macro_rules! impl_sample {
    ($ty:ty, $kind:ident) => {
        impl private::Sealed for $ty {}

        impl Sample for $ty {
            #[inline]
            fn samples(buf: &[Self]) -> Samples<'_> {
                Samples::$kind(buf)
            }

            #[inline]
            fn samples_mut(buf: &mut [Self]) -> SamplesMut<'_> {
                SamplesMut::$kind(buf)
            }
        }

        impl<'a> From<&'a [$ty]> for Samples<'a> {
            fn from(buf: &'a [$ty]) -> Self {
                Samples::$kind(buf)
            }
        }

        impl<'a> From<&'a mut [$ty]> for SamplesMut<'a> {
            fn from(buf: &'a mut [$ty]) -> Self {
                SamplesMut::$kind(buf)
            }
        }
    };
}

impl_sample!(i16, I16);
impl_sample!(i32, I32);
impl_sample!(f32, F32);
impl_sample!(f64, F64);

/// A borrowed sample buffer to write from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Samples<'a> {
    I16(&'a [i16]),
    I32(&'a [i32]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

impl Samples<'_> {
    pub fn len(&self) -> usize {
        match self {
            Samples::I16(b) => b.len(),
            Samples::I32(b) => b.len(),
            Samples::F32(b) => b.len(),
            Samples::F64(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            Samples::I16(_) => SampleKind::I16,
            Samples::I32(_) => SampleKind::I32,
            Samples::F32(_) => SampleKind::F32,
            Samples::F64(_) => SampleKind::F64,
        }
    }
}

/// A borrowed sample buffer to read into.
#[derive(Debug, PartialEq)]
pub enum SamplesMut<'a> {
    I16(&'a mut [i16]),
    I32(&'a mut [i32]),
    F32(&'a mut [f32]),
    F64(&'a mut [f64]),
}

impl SamplesMut<'_> {
    pub fn len(&self) -> usize {
        match self {
            SamplesMut::I16(b) => b.len(),
            SamplesMut::I32(b) => b.len(),
            SamplesMut::F32(b) => b.len(),
            SamplesMut::F64(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> SampleKind {
        match self {
            SamplesMut::I16(_) => SampleKind::I16,
            SamplesMut::I32(_) => SampleKind::I32,
            SamplesMut::F32(_) => SampleKind::F32,
            SamplesMut::F64(_) => SampleKind::F64,
        }
    }
}

const READ_ALL_CHUNK: usize = 4096;

impl SndFile<'_> {
    /// Reads up to `buf.len()` items. Returns the number read; a short count
    /// means the end of the stream.
    pub fn read_items<T: Sample>(&mut self, buf: &mut [T]) -> SfResult<usize> {
        self.read_items_dyn(T::samples_mut(buf))
    }

    pub fn read_items_dyn(&mut self, buf: SamplesMut<'_>) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        if buf.is_empty() {
            return Err(SndfileError::InvalidArgument("sample buffer is empty"));
        }
        let n = samples_ffi::sf_read_items(ptr, buf);
        checked_read(ptr, n)
    }

    /// Reads up to `buf.len() / channels` frames. Returns the number of frames read.
    pub fn read_frames<T: Sample>(&mut self, buf: &mut [T]) -> SfResult<usize> {
        self.read_frames_dyn(T::samples_mut(buf))
    }

    pub fn read_frames_dyn(&mut self, buf: SamplesMut<'_>) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        let frames = self.frames_in(buf.len())?;
        let n = samples_ffi::sf_read_frames(ptr, buf, frames);
        checked_read(ptr, n)
    }

    /// Writes every item of `buf`. Anything short of that is an error.
    pub fn write_items<T: Sample>(&mut self, buf: &[T]) -> SfResult<usize> {
        self.write_items_dyn(T::samples(buf))
    }

    pub fn write_items_dyn(&mut self, buf: Samples<'_>) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        if buf.is_empty() {
            return Err(SndfileError::InvalidArgument("sample buffer is empty"));
        }
        let len = buf.len();
        let n = samples_ffi::sf_write_items(ptr, buf);
        checked_exact(ptr, n, len)
    }

    /// Writes `buf.len() / channels` whole frames. Returns the number of frames written.
    pub fn write_frames<T: Sample>(&mut self, buf: &[T]) -> SfResult<usize> {
        self.write_frames_dyn(T::samples(buf))
    }

    pub fn write_frames_dyn(&mut self, buf: Samples<'_>) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        let frames = self.frames_in(buf.len())?;
        let n = samples_ffi::sf_write_frames(ptr, buf, frames);
        checked_exact(ptr, n, frames as usize)
    }

    /// Reads undecoded bytes from the audio data. Anything short of a full
    /// buffer, including the end of the data, is a `TransferError`.
    pub fn read_raw(&mut self, buf: &mut [u8]) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        if buf.is_empty() {
            return Err(SndfileError::InvalidArgument("byte buffer is empty"));
        }
        let n = unsafe {
            sys::sf_read_raw(ptr, buf.as_mut_ptr().cast(), buf.len() as sys::sf_count_t)
        };
        checked_exact(ptr, n, buf.len())
    }

    /// Writes already encoded bytes to the audio data.
    pub fn write_raw(&mut self, buf: &[u8]) -> SfResult<usize> {
        let ptr = self.as_ptr()?;
        if buf.is_empty() {
            return Err(SndfileError::InvalidArgument("byte buffer is empty"));
        }
        let n = unsafe {
            sys::sf_write_raw(ptr, buf.as_ptr().cast(), buf.len() as sys::sf_count_t)
        };
        checked_exact(ptr, n, buf.len())
    }

    /// Reads everything from the current position to the end of the stream.
    pub fn read_all_items<T: Sample>(&mut self) -> SfResult<Vec<T>> {
        let mut out = Vec::new();
        let mut chunk = vec![T::default(); READ_ALL_CHUNK];
        loop {
            let n = self.read_items(&mut chunk)?;
            if n == 0 {
                break;
            }
            out.extend_from_slice(&chunk[..n]);
        }
        Ok(out)
    }

    fn frames_in(&self, items: usize) -> SfResult<sys::sf_count_t> {
        let channels = self.channels();
        if channels < 1 {
            return Err(SndfileError::InvalidArgument("stream has no channels"));
        }
        let frames = items / channels as usize;
        if frames < 1 {
            return Err(SndfileError::InvalidArgument(
                "buffer holds less than one frame",
            ));
        }
        Ok(frames as sys::sf_count_t)
    }
}

fn checked_read(ptr: *mut sys::SNDFILE, n: sys::sf_count_t) -> SfResult<usize> {
    if n < 0 {
        return Err(SndfileError::TransferError {
            message: crate::file::sndfile_ffi::error_text(ptr),
        });
    }
    Ok(n as usize)
}

// Writes and raw reads must move the whole buffer.
fn checked_exact(
    ptr: *mut sys::SNDFILE,
    n: sys::sf_count_t,
    expected: usize,
) -> SfResult<usize> {
    if n < 0 || n as usize != expected {
        return Err(SndfileError::TransferError {
            message: crate::file::sndfile_ffi::error_text(ptr),
        });
    }
    Ok(n as usize)
}

pub(crate) mod samples_ffi {
    use sndfile_sys::ffi as sys;

    use crate::samples::{Samples, SamplesMut};

    #[inline]
    pub fn sf_read_items(ptr: *mut sys::SNDFILE, buf: SamplesMut<'_>) -> sys::sf_count_t {
        let len = buf.len() as sys::sf_count_t;
        unsafe {
            match buf {
                SamplesMut::I16(b) => sys::sf_read_short(ptr, b.as_mut_ptr(), len),
                SamplesMut::I32(b) => sys::sf_read_int(ptr, b.as_mut_ptr(), len),
                SamplesMut::F32(b) => sys::sf_read_float(ptr, b.as_mut_ptr(), len),
                SamplesMut::F64(b) => sys::sf_read_double(ptr, b.as_mut_ptr(), len),
            }
        }
    }

    /// `frames * channels` must not exceed the buffer length.
    #[inline]
    pub fn sf_read_frames(
        ptr: *mut sys::SNDFILE,
        buf: SamplesMut<'_>,
        frames: sys::sf_count_t,
    ) -> sys::sf_count_t {
        unsafe {
            match buf {
                SamplesMut::I16(b) => sys::sf_readf_short(ptr, b.as_mut_ptr(), frames),
                SamplesMut::I32(b) => sys::sf_readf_int(ptr, b.as_mut_ptr(), frames),
                SamplesMut::F32(b) => sys::sf_readf_float(ptr, b.as_mut_ptr(), frames),
                SamplesMut::F64(b) => sys::sf_readf_double(ptr, b.as_mut_ptr(), frames),
            }
        }
    }

    #[inline]
    pub fn sf_write_items(ptr: *mut sys::SNDFILE, buf: Samples<'_>) -> sys::sf_count_t {
        let len = buf.len() as sys::sf_count_t;
        unsafe {
            match buf {
                Samples::I16(b) => sys::sf_write_short(ptr, b.as_ptr(), len),
                Samples::I32(b) => sys::sf_write_int(ptr, b.as_ptr(), len),
                Samples::F32(b) => sys::sf_write_float(ptr, b.as_ptr(), len),
                Samples::F64(b) => sys::sf_write_double(ptr, b.as_ptr(), len),
            }
        }
    }

    /// `frames * channels` must not exceed the buffer length.
    #[inline]
    pub fn sf_write_frames(
        ptr: *mut sys::SNDFILE,
        buf: Samples<'_>,
        frames: sys::sf_count_t,
    ) -> sys::sf_count_t {
        unsafe {
            match buf {
                Samples::I16(b) => sys::sf_writef_short(ptr, b.as_ptr(), frames),
                Samples::I32(b) => sys::sf_writef_int(ptr, b.as_ptr(), frames),
                Samples::F32(b) => sys::sf_writef_float(ptr, b.as_ptr(), frames),
                Samples::F64(b) => sys::sf_writef_double(ptr, b.as_ptr(), frames),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::{Format, Info, Mode},
        test_assets::{decoded_data::*, temp_file::TempPath},
    };

    fn round_trip<T: Sample + PartialEq + std::fmt::Debug>(format: Format, data: &[T]) {
        let path = TempPath::new("round_trip.wav");
        let mut info = Info::new(44_100, 2, format);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        assert_eq!(out.write_frames(data).unwrap(), data.len() / 2);
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(info.frames as usize, data.len() / 2);
        let mut back = vec![T::default(); data.len()];
        assert_eq!(input.read_frames(&mut back).unwrap(), data.len() / 2);
        assert_eq!(back, data);
        input.close().unwrap();
    }

    #[test]
    fn test_round_trip_i16() {
        round_trip(Format::WAV | Format::PCM_16, &asset_interleaved_i16(2, 32, -1200));
    }

    #[test]
    fn test_round_trip_i32() {
        round_trip(Format::WAV | Format::PCM_32, &asset_interleaved_i32(2, 32, -77_000));
    }

    #[test]
    fn test_round_trip_f32() {
        round_trip(Format::WAV | Format::FLOAT, &asset_interleaved_f32(2, 32, -0.3));
    }

    #[test]
    fn test_round_trip_f64() {
        round_trip(Format::WAV | Format::DOUBLE, &asset_interleaved_f64(2, 32, -0.25));
    }

    #[test]
    fn test_read_frames_ignores_partial_frame() {
        let path = TempPath::new("partial_frame.wav");
        let data = asset_interleaved_i16(2, 4, 10);
        let mut info = Info::new(8_000, 2, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        out.write_items(&data).unwrap();
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        let mut buf = [i16::MIN; 5];
        assert_eq!(input.read_frames(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..4], &data[..4]);
        assert_eq!(buf[4], i16::MIN);

        let mut one = [0_i16; 1];
        assert!(matches!(
            input.read_frames(&mut one),
            Err(SndfileError::InvalidArgument(_))
        ));
        assert!(matches!(
            input.read_items::<i16>(&mut []),
            Err(SndfileError::InvalidArgument(_))
        ));
        input.close().unwrap();
    }

    #[test]
    fn test_short_read_at_end_of_stream() {
        let path = TempPath::new("short_read.wav");
        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        out.write_items(&[1_i16; 10]).unwrap();
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        let mut buf = [0_i16; 16];
        assert_eq!(input.read_items(&mut buf).unwrap(), 10);
        assert_eq!(input.read_items(&mut buf).unwrap(), 0);
        input.close().unwrap();
    }

    #[test]
    fn test_write_to_read_only_stream_fails() {
        let path = TempPath::new("read_only.wav");
        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        out.write_items(&[1_i16; 4]).unwrap();
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        match input.write_items(&[1_i16; 4]) {
            Err(SndfileError::TransferError { message }) => assert!(!message.is_empty()),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            input.write_items::<f32>(&[]),
            Err(SndfileError::InvalidArgument(_))
        ));
        input.close().unwrap();
    }

    #[test]
    fn test_dyn_buffers_and_conversion() {
        let path = TempPath::new("dyn.wav");
        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        let data = [0_i16, 16_384, -16_384, 8_192];
        let samples = Samples::from(&data[..]);
        assert_eq!(samples.kind(), SampleKind::I16);
        assert_eq!(out.write_items_dyn(samples).unwrap(), 4);
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        let mut back = [0.0_f64; 4];
        let buf = SamplesMut::from(&mut back[..]);
        assert_eq!(buf.kind(), SampleKind::F64);
        assert_eq!(input.read_items_dyn(buf).unwrap(), 4);
        assert_eq!(back, [0.0, 0.5, -0.5, 0.25]);
        input.close().unwrap();
    }

    #[test]
    fn test_read_all_and_raw_bytes() {
        let path = TempPath::new("raw.wav");
        let data = asset_interleaved_i16(1, 5000, 0);
        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        out.write_items(&data).unwrap();
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(input.read_all_items::<i16>().unwrap(), data);

        input.seek(0, crate::Whence::Start).unwrap();
        let mut bytes = [0_u8; 4];
        assert_eq!(input.read_raw(&mut bytes).unwrap(), 4);
        assert_eq!(&bytes[..2], &data[0].to_le_bytes());
        assert_eq!(&bytes[2..], &data[1].to_le_bytes());
        input.close().unwrap();
    }

    #[test]
    fn test_short_raw_read_is_an_error() {
        let path = TempPath::new("raw_short.wav");
        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        out.write_items(&[5_i16, 6, 7]).unwrap();
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        let mut bytes = [0_u8; 4];
        assert_eq!(input.read_raw(&mut bytes).unwrap(), 4);
        // Two bytes left for a four byte request.
        assert!(matches!(
            input.read_raw(&mut bytes),
            Err(SndfileError::TransferError { .. })
        ));
        assert!(matches!(
            input.read_raw(&mut []),
            Err(SndfileError::InvalidArgument(_))
        ));
        input.close().unwrap();
    }

    #[test]
    fn test_write_raw_bytes() {
        let path = TempPath::new("raw_write.wav");
        let data = [100_i16, -200, 300, -400];
        let bytes: Vec<u8> = data.iter().flat_map(|s| s.to_le_bytes()).collect();

        let mut info = Info::new(8_000, 1, Format::WAV | Format::PCM_16);
        let mut out = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        assert_eq!(out.write_raw(&bytes).unwrap(), bytes.len());
        out.close().unwrap();

        let mut info = Info::default();
        let mut input = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(info.frames, 4);
        assert_eq!(input.read_all_items::<i16>().unwrap(), data);
        assert!(matches!(
            input.write_raw(&bytes),
            Err(SndfileError::TransferError { .. })
        ));
        input.close().unwrap();
    }
}

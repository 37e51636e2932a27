//! Wrappers over `sf_command`: library queries, normalisation, signal
//! analysis, header control and format enumeration.
use core::ffi::{c_int, c_void};

use sndfile_sys::ffi as sys;

use crate::{
    file::{sndfile_ffi, SndFile},
    format::{Format, Info},
    util, Binding, SfResult, SndfileError,
};

/// One entry of libsndfile's format tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub format: Format,
    pub name: String,
    /// Usual file extension, if the entry has one. Subtypes never do.
    pub extension: Option<String>,
}

impl Binding for FormatInfo {
    type Raw = sys::SF_FORMAT_INFO;

    fn from_raw(raw: &Self::Raw) -> Self {
        Self {
            format: Format::from_bits(raw.format),
            name: unsafe { util::string_from_ptr(raw.name) }.unwrap_or_default(),
            extension: unsafe { util::string_from_ptr(raw.extension) },
        }
    }

    fn to_raw(&self) -> Self::Raw {
        // The name strings are owned by libsndfile; only the code goes back in.
        sys::SF_FORMAT_INFO {
            format: self.format.bits(),
            name: core::ptr::null(),
            extension: core::ptr::null(),
        }
    }
}

/// Location of audio data embedded in a larger file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedFileInfo {
    /// Byte offset of the embedded file.
    pub offset: i64,
    pub length: i64,
}

/// Ambisonic flag of a WAVEX file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ambisonic {
    None,
    BFormat,
}

impl From<Ambisonic> for c_int {
    fn from(value: Ambisonic) -> Self {
        match value {
            Ambisonic::None => sys::SF_AMBISONIC_NONE as c_int,
            Ambisonic::BFormat => sys::SF_AMBISONIC_B_FORMAT as c_int,
        }
    }
}

impl TryFrom<c_int> for Ambisonic {
    type Error = SndfileError;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        match value as u32 {
            sys::SF_AMBISONIC_NONE => Ok(Ambisonic::None),
            sys::SF_AMBISONIC_B_FORMAT => Ok(Ambisonic::BFormat),
            _ => Err(SndfileError::InvalidArgument("unknown ambisonic value")),
        }
    }
}

const LIB_VERSION_LEN: usize = 128;
const LOG_INFO_LEN: usize = 16 * 1024;

/// The library version as reported through `sf_command`, e.g. `libsndfile-1.2.2`.
pub fn lib_version() -> String {
    let mut buf = [0 as core::ffi::c_char; LIB_VERSION_LEN];
    command_ffi::sf_command(
        core::ptr::null_mut(),
        sys::SFC_GET_LIB_VERSION,
        buf.as_mut_ptr(),
        buf.len(),
    );
    util::read_fixed(&buf)
}

/// The library version string (`sf_version_string`).
pub fn version_string() -> String {
    unsafe { util::string_from_ptr(sys::sf_version_string()) }.unwrap_or_default()
}

/// The simple formats: common major/subtype combinations with a short description.
pub fn simple_formats() -> Vec<FormatInfo> {
    enumerate_formats(sys::SFC_GET_SIMPLE_FORMAT_COUNT, sys::SFC_GET_SIMPLE_FORMAT)
}

/// Every major type (container) the library was built with.
pub fn major_formats() -> Vec<FormatInfo> {
    enumerate_formats(sys::SFC_GET_FORMAT_MAJOR_COUNT, sys::SFC_GET_FORMAT_MAJOR)
}

/// Every subtype (encoding) the library was built with.
pub fn subtype_formats() -> Vec<FormatInfo> {
    enumerate_formats(sys::SFC_GET_FORMAT_SUBTYPE_COUNT, sys::SFC_GET_FORMAT_SUBTYPE)
}

/// Describes a single major type or subtype. Returns `None` for unknown codes.
pub fn format_info(format: Format) -> Option<FormatInfo> {
    let mut raw = FormatInfo {
        format,
        name: String::new(),
        extension: None,
    }
    .to_raw();
    let res = command_ffi::sf_command(
        core::ptr::null_mut(),
        sys::SFC_GET_FORMAT_INFO,
        &mut raw,
        core::mem::size_of::<sys::SF_FORMAT_INFO>(),
    );
    (res == 0).then(|| FormatInfo::from_raw(&raw))
}

fn enumerate_formats(
    count_cmd: sys::_bindgen_ty_2,
    entry_cmd: sys::_bindgen_ty_2,
) -> Vec<FormatInfo> {
    let mut count: c_int = 0;
    command_ffi::sf_command(
        core::ptr::null_mut(),
        count_cmd,
        &mut count,
        core::mem::size_of::<c_int>(),
    );
    (0..count)
        .filter_map(|index| {
            let mut raw = sys::SF_FORMAT_INFO {
                format: index,
                name: core::ptr::null(),
                extension: core::ptr::null(),
            };
            let res = command_ffi::sf_command(
                core::ptr::null_mut(),
                entry_cmd,
                &mut raw,
                core::mem::size_of::<sys::SF_FORMAT_INFO>(),
            );
            (res == 0).then(|| FormatInfo::from_raw(&raw))
        })
        .collect()
}

impl SndFile<'_> {
    /// The header parsing log libsndfile keeps for this stream.
    pub fn log_info(&self) -> SfResult<String> {
        let ptr = self.as_ptr()?;
        let mut buf = vec![0 as core::ffi::c_char; LOG_INFO_LEN];
        command_ffi::sf_command(ptr, sys::SFC_GET_LOG_INFO, buf.as_mut_ptr(), buf.len());
        Ok(util::read_fixed(&buf))
    }

    /// Re-reads the descriptor from the library, picking up the frame count
    /// of data written since open. Also refreshes [`info`](SndFile::info).
    pub fn current_info(&mut self) -> SfResult<Info> {
        let ptr = self.as_ptr()?;
        let mut raw = self.info().to_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_CURRENT_SF_INFO,
            &mut raw,
            core::mem::size_of::<sys::SF_INFO>(),
        );
        check_zero(ptr, "SFC_GET_CURRENT_SF_INFO", res)?;
        let info = Info::from_raw(&raw);
        self.set_info(info);
        Ok(info)
    }

    /// Bytes per second of the encoded stream, if the encoding has a fixed rate.
    pub fn current_byterate(&self) -> SfResult<Option<i32>> {
        let ptr = self.as_ptr()?;
        let rate = unsafe { sys::sf_current_byterate(ptr) };
        Ok((rate > 0).then_some(rate))
    }

    /// Whether float reads and writes are normalised to `[-1.0, 1.0]`. Default on.
    pub fn float_normalization(&self) -> SfResult<bool> {
        self.get_flag(sys::SFC_GET_NORM_FLOAT)
    }

    /// Sets float normalisation. Returns the previous setting.
    pub fn set_float_normalization(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_SET_NORM_FLOAT, on)
    }

    pub fn double_normalization(&self) -> SfResult<bool> {
        self.get_flag(sys::SFC_GET_NORM_DOUBLE)
    }

    /// Sets double normalisation. Returns the previous setting.
    pub fn set_double_normalization(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_SET_NORM_DOUBLE, on)
    }

    /// Scales float file data to the full integer range when read as integers.
    /// Returns the previous setting.
    pub fn set_scale_float_int_read(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_SET_SCALE_FLOAT_INT_READ, on)
    }

    /// Scales integers written to a float file into `[-1.0, 1.0]`.
    /// Returns the previous setting.
    pub fn set_scale_int_float_write(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_SET_SCALE_INT_FLOAT_WRITE, on)
    }

    /// Scans the whole stream for its peak sample. Slow on large files.
    pub fn calc_signal_max(&mut self) -> SfResult<f64> {
        self.calc_peak(sys::SFC_CALC_SIGNAL_MAX, "SFC_CALC_SIGNAL_MAX")
    }

    /// Like [`calc_signal_max`](SndFile::calc_signal_max), normalised to `[0.0, 1.0]`.
    pub fn calc_norm_signal_max(&mut self) -> SfResult<f64> {
        self.calc_peak(sys::SFC_CALC_NORM_SIGNAL_MAX, "SFC_CALC_NORM_SIGNAL_MAX")
    }

    /// Scans the whole stream for the peak of each channel.
    pub fn calc_max_all_channels(&mut self) -> SfResult<Vec<f64>> {
        self.calc_peaks(sys::SFC_CALC_MAX_ALL_CHANNELS, "SFC_CALC_MAX_ALL_CHANNELS")
    }

    pub fn calc_norm_max_all_channels(&mut self) -> SfResult<Vec<f64>> {
        self.calc_peaks(
            sys::SFC_CALC_NORM_MAX_ALL_CHANNELS,
            "SFC_CALC_NORM_MAX_ALL_CHANNELS",
        )
    }

    /// The peak stored in the file header, if it has one.
    pub fn signal_max(&self) -> SfResult<Option<f64>> {
        let ptr = self.as_ptr()?;
        let mut peak = 0.0_f64;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_SIGNAL_MAX,
            &mut peak,
            core::mem::size_of::<f64>(),
        );
        Ok(is_true(res).then_some(peak))
    }

    /// Per-channel peaks stored in the file header, if it has them.
    pub fn max_all_channels(&self) -> SfResult<Option<Vec<f64>>> {
        let ptr = self.as_ptr()?;
        let mut peaks = vec![0.0_f64; self.channel_count()];
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_MAX_ALL_CHANNELS,
            peaks.as_mut_ptr(),
            core::mem::size_of_val(peaks.as_slice()),
        );
        Ok(is_true(res).then_some(peaks))
    }

    /// Requests a PEAK chunk in a float WAV/AIFF/CAF/RF64 file being written.
    /// Must precede the first write. Returns libsndfile's answer, which echoes
    /// `on` when the format supports the chunk and is `false` otherwise.
    pub fn set_add_peak_chunk(&mut self, on: bool) -> SfResult<bool> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_ADD_PEAK_CHUNK,
            core::ptr::null_mut::<c_void>(),
            usize::from(on),
        );
        Ok(is_true(res))
    }

    /// Rewrites the header to match the data written so far.
    pub fn update_header_now(&mut self) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        command_ffi::sf_command(
            ptr,
            sys::SFC_UPDATE_HEADER_NOW,
            core::ptr::null_mut::<c_void>(),
            0,
        );
        Ok(())
    }

    /// Rewrites the header after every write. Returns whether it is now enabled.
    pub fn set_update_header_auto(&mut self, on: bool) -> SfResult<bool> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_UPDATE_HEADER_AUTO,
            core::ptr::null_mut::<c_void>(),
            usize::from(on),
        );
        Ok(is_true(res))
    }

    /// Truncates a file opened for writing to `frames` frames.
    pub fn truncate(&mut self, frames: i64) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        let mut frames = frames;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_FILE_TRUNCATE,
            &mut frames,
            core::mem::size_of::<i64>(),
        );
        check_zero(ptr, "SFC_FILE_TRUNCATE", res)
    }

    /// Byte offset of the audio data in a RAW file.
    pub fn set_raw_start_offset(&mut self, offset: i64) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        let mut offset = offset;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_RAW_START_OFFSET,
            &mut offset,
            core::mem::size_of::<i64>(),
        );
        check_zero(ptr, "SFC_SET_RAW_START_OFFSET", res)
    }

    /// Clip instead of wrapping when converting out-of-range floats to integers.
    /// Returns the new setting.
    pub fn set_clipping(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_SET_CLIPPING, on)
    }

    pub fn clipping(&self) -> SfResult<bool> {
        self.get_flag(sys::SFC_GET_CLIPPING)
    }

    /// Whether raw bytes from [`read_raw`](SndFile::read_raw) are in the
    /// opposite byte order to the CPU.
    pub fn raw_needs_endswap(&self) -> SfResult<bool> {
        self.get_flag(sys::SFC_RAW_DATA_NEEDS_ENDSWAP)
    }

    /// Marks a WAVEX file being written as ambisonic. Returns the value now
    /// in effect, or `None` if the file is not WAVEX.
    pub fn set_wavex_ambisonic(&mut self, value: Ambisonic) -> SfResult<Option<Ambisonic>> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_WAVEX_SET_AMBISONIC,
            core::ptr::null_mut::<c_void>(),
            c_int::from(value) as usize,
        );
        Ok(Ambisonic::try_from(res).ok())
    }

    pub fn wavex_ambisonic(&self) -> SfResult<Option<Ambisonic>> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_WAVEX_GET_AMBISONIC,
            core::ptr::null_mut::<c_void>(),
            0,
        );
        Ok(Ambisonic::try_from(res).ok())
    }

    /// Lets an RF64 file being written fall back to plain WAV when small enough.
    pub fn set_rf64_auto_downgrade(&mut self, on: bool) -> SfResult<bool> {
        self.set_flag(sys::SFC_RF64_AUTO_DOWNGRADE, on)
    }

    /// Quality of a variable bit rate encoder, `0.0` (lowest) to `1.0` (highest).
    /// Must precede the first write.
    pub fn set_vbr_quality(&mut self, quality: f64) -> SfResult<()> {
        self.set_level(
            sys::SFC_SET_VBR_ENCODING_QUALITY,
            "SFC_SET_VBR_ENCODING_QUALITY",
            quality,
        )
    }

    /// Compression level for FLAC, Ogg and Opus, `0.0` (fastest) to `1.0` (smallest).
    pub fn set_compression_level(&mut self, level: f64) -> SfResult<()> {
        self.set_level(
            sys::SFC_SET_COMPRESSION_LEVEL,
            "SFC_SET_COMPRESSION_LEVEL",
            level,
        )
    }

    pub fn embedded_file_info(&self) -> SfResult<EmbedFileInfo> {
        let ptr = self.as_ptr()?;
        let mut raw = sys::SF_EMBED_FILE_INFO {
            offset: 0,
            length: 0,
        };
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_EMBED_FILE_INFO,
            &mut raw,
            core::mem::size_of::<sys::SF_EMBED_FILE_INFO>(),
        );
        check_zero(ptr, "SFC_GET_EMBED_FILE_INFO", res)?;
        Ok(EmbedFileInfo {
            offset: raw.offset,
            length: raw.length,
        })
    }

    /// Sends any `sf_command` request and returns the raw result.
    ///
    /// # Safety
    /// `data` and `datasize` must satisfy the contract of `command`; the
    /// library reads or writes up to `datasize` bytes through `data`.
    pub unsafe fn command_raw(
        &mut self,
        command: c_int,
        data: *mut c_void,
        datasize: c_int,
    ) -> SfResult<c_int> {
        let ptr = self.as_ptr()?;
        Ok(sys::sf_command(ptr, command, data, datasize))
    }

    pub(crate) fn channel_count(&self) -> usize {
        usize::try_from(self.channels()).unwrap_or(0)
    }

    fn get_flag(&self, command: sys::_bindgen_ty_2) -> SfResult<bool> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(ptr, command, core::ptr::null_mut::<c_void>(), 0);
        Ok(is_true(res))
    }

    fn set_flag(&mut self, command: sys::_bindgen_ty_2, on: bool) -> SfResult<bool> {
        let ptr = self.as_ptr()?;
        let res = command_ffi::sf_command(
            ptr,
            command,
            core::ptr::null_mut::<c_void>(),
            usize::from(on),
        );
        Ok(is_true(res))
    }

    fn set_level(
        &mut self,
        command: sys::_bindgen_ty_2,
        name: &'static str,
        value: f64,
    ) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        let mut value = value;
        let res = command_ffi::sf_command(ptr, command, &mut value, core::mem::size_of::<f64>());
        if !is_true(res) {
            return Err(command_error(ptr, name));
        }
        Ok(())
    }

    fn calc_peak(&mut self, command: sys::_bindgen_ty_2, name: &'static str) -> SfResult<f64> {
        let ptr = self.as_ptr()?;
        let mut peak = 0.0_f64;
        let res = command_ffi::sf_command(ptr, command, &mut peak, core::mem::size_of::<f64>());
        check_zero(ptr, name, res)?;
        Ok(peak)
    }

    fn calc_peaks(
        &mut self,
        command: sys::_bindgen_ty_2,
        name: &'static str,
    ) -> SfResult<Vec<f64>> {
        let ptr = self.as_ptr()?;
        let mut peaks = vec![0.0_f64; self.channel_count()];
        let res = command_ffi::sf_command(
            ptr,
            command,
            peaks.as_mut_ptr(),
            core::mem::size_of_val(peaks.as_slice()),
        );
        check_zero(ptr, name, res)?;
        Ok(peaks)
    }
}

#[inline]
pub(crate) fn is_true(res: c_int) -> bool {
    res == sys::SF_TRUE as c_int
}

pub(crate) fn command_error(ptr: *mut sys::SNDFILE, command: &'static str) -> SndfileError {
    SndfileError::Command {
        command,
        message: sndfile_ffi::error_text(ptr),
    }
}

fn check_zero(ptr: *mut sys::SNDFILE, command: &'static str, res: c_int) -> SfResult<()> {
    if res != 0 {
        return Err(command_error(ptr, command));
    }
    Ok(())
}

pub(crate) mod command_ffi {
    use core::ffi::{c_int, c_void};

    use sndfile_sys::ffi as sys;

    /// `sf_command` with a typed data pointer. `size` is in bytes and is
    /// also the value argument of flag style commands.
    #[inline]
    pub fn sf_command<T>(
        ptr: *mut sys::SNDFILE,
        command: sys::_bindgen_ty_2,
        data: *mut T,
        size: usize,
    ) -> c_int {
        let size = c_int::try_from(size).unwrap_or(c_int::MAX);
        unsafe { sys::sf_command(ptr, command as c_int, data.cast::<c_void>(), size) }
    }
}

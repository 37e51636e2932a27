//! Format codes, the stream descriptor and the open/seek enums.
use core::ffi::c_int;

use sndfile_sys::ffi as sys;

use crate::{Binding, SndfileError};

pub type FormatRaw = c_int;

/// A libsndfile format code.
///
/// A format is the bitwise OR of three regions:
///
/// - a major type, the container (`WAV`, `AIFF`, `FLAC`, ...),
/// - a subtype, the sample encoding (`PCM_16`, `FLOAT`, `VORBIS`, ...),
/// - an optional endianness tag (`ENDIAN_FILE` is the default).
///
/// ```
/// use sndfile::Format;
///
/// let format = Format::AIFF | Format::PCM_24;
/// assert_eq!(format.major(), Format::AIFF);
/// assert_eq!(format.subtype(), Format::PCM_24);
/// assert_eq!(format.endian(), Format::ENDIAN_FILE);
/// ```
#[repr(transparent)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Format(FormatRaw);

impl Format {
    // Major types
    /// Microsoft WAV format (little endian default).
    pub const WAV: Self = Self(sys::SF_FORMAT_WAV as FormatRaw);
    /// Apple/SGI AIFF format (big endian).
    pub const AIFF: Self = Self(sys::SF_FORMAT_AIFF as FormatRaw);
    /// Sun/NeXT AU format (big endian).
    pub const AU: Self = Self(sys::SF_FORMAT_AU as FormatRaw);
    /// RAW PCM data, no header.
    pub const RAW: Self = Self(sys::SF_FORMAT_RAW as FormatRaw);
    /// Ensoniq PARIS file format.
    pub const PAF: Self = Self(sys::SF_FORMAT_PAF as FormatRaw);
    /// Amiga IFF / SVX8 / SV16 format.
    pub const SVX: Self = Self(sys::SF_FORMAT_SVX as FormatRaw);
    /// Sphere NIST format.
    pub const NIST: Self = Self(sys::SF_FORMAT_NIST as FormatRaw);
    /// VOC files.
    pub const VOC: Self = Self(sys::SF_FORMAT_VOC as FormatRaw);
    /// Berkeley/IRCAM/CARL.
    pub const IRCAM: Self = Self(sys::SF_FORMAT_IRCAM as FormatRaw);
    /// Sonic Foundry's 64 bit RIFF/WAV.
    pub const W64: Self = Self(sys::SF_FORMAT_W64 as FormatRaw);
    /// Matlab (tm) V4.2 / GNU Octave 2.0.
    pub const MAT4: Self = Self(sys::SF_FORMAT_MAT4 as FormatRaw);
    /// Matlab (tm) V5.0 / GNU Octave 2.1.
    pub const MAT5: Self = Self(sys::SF_FORMAT_MAT5 as FormatRaw);
    /// Portable Voice Format.
    pub const PVF: Self = Self(sys::SF_FORMAT_PVF as FormatRaw);
    /// Fasttracker 2 Extended Instrument.
    pub const XI: Self = Self(sys::SF_FORMAT_XI as FormatRaw);
    /// HMM Tool Kit format.
    pub const HTK: Self = Self(sys::SF_FORMAT_HTK as FormatRaw);
    /// Midi Sample Dump Standard.
    pub const SDS: Self = Self(sys::SF_FORMAT_SDS as FormatRaw);
    /// Audio Visual Research.
    pub const AVR: Self = Self(sys::SF_FORMAT_AVR as FormatRaw);
    /// MS WAVE with WAVEFORMATEX.
    pub const WAVEX: Self = Self(sys::SF_FORMAT_WAVEX as FormatRaw);
    /// Sound Designer 2.
    pub const SD2: Self = Self(sys::SF_FORMAT_SD2 as FormatRaw);
    /// FLAC lossless file format.
    pub const FLAC: Self = Self(sys::SF_FORMAT_FLAC as FormatRaw);
    /// Core Audio File format.
    pub const CAF: Self = Self(sys::SF_FORMAT_CAF as FormatRaw);
    /// Psion WVE format.
    pub const WVE: Self = Self(sys::SF_FORMAT_WVE as FormatRaw);
    /// Xiph OGG container.
    pub const OGG: Self = Self(sys::SF_FORMAT_OGG as FormatRaw);
    /// Akai MPC 2000 sampler.
    pub const MPC2K: Self = Self(sys::SF_FORMAT_MPC2K as FormatRaw);
    /// RF64 WAV file.
    pub const RF64: Self = Self(sys::SF_FORMAT_RF64 as FormatRaw);
    /// MPEG-1/2 audio stream.
    pub const MPEG: Self = Self(sys::SF_FORMAT_MPEG as FormatRaw);

    // Subtypes
    /// Signed 8 bit data.
    pub const PCM_S8: Self = Self(sys::SF_FORMAT_PCM_S8 as FormatRaw);
    /// Signed 16 bit data.
    pub const PCM_16: Self = Self(sys::SF_FORMAT_PCM_16 as FormatRaw);
    /// Signed 24 bit data.
    pub const PCM_24: Self = Self(sys::SF_FORMAT_PCM_24 as FormatRaw);
    /// Signed 32 bit data.
    pub const PCM_32: Self = Self(sys::SF_FORMAT_PCM_32 as FormatRaw);
    /// Unsigned 8 bit data (WAV and RAW only).
    pub const PCM_U8: Self = Self(sys::SF_FORMAT_PCM_U8 as FormatRaw);
    /// 32 bit float data.
    pub const FLOAT: Self = Self(sys::SF_FORMAT_FLOAT as FormatRaw);
    /// 64 bit float data.
    pub const DOUBLE: Self = Self(sys::SF_FORMAT_DOUBLE as FormatRaw);
    /// U-Law encoded.
    pub const ULAW: Self = Self(sys::SF_FORMAT_ULAW as FormatRaw);
    /// A-Law encoded.
    pub const ALAW: Self = Self(sys::SF_FORMAT_ALAW as FormatRaw);
    /// IMA ADPCM.
    pub const IMA_ADPCM: Self = Self(sys::SF_FORMAT_IMA_ADPCM as FormatRaw);
    /// Microsoft ADPCM.
    pub const MS_ADPCM: Self = Self(sys::SF_FORMAT_MS_ADPCM as FormatRaw);
    /// GSM 6.10 encoding.
    pub const GSM610: Self = Self(sys::SF_FORMAT_GSM610 as FormatRaw);
    /// Oki Dialogic ADPCM encoding.
    pub const VOX_ADPCM: Self = Self(sys::SF_FORMAT_VOX_ADPCM as FormatRaw);
    /// 16kbs NMS G721-variant encoding.
    pub const NMS_ADPCM_16: Self = Self(sys::SF_FORMAT_NMS_ADPCM_16 as FormatRaw);
    /// 24kbs NMS G721-variant encoding.
    pub const NMS_ADPCM_24: Self = Self(sys::SF_FORMAT_NMS_ADPCM_24 as FormatRaw);
    /// 32kbs NMS G721-variant encoding.
    pub const NMS_ADPCM_32: Self = Self(sys::SF_FORMAT_NMS_ADPCM_32 as FormatRaw);
    /// 32kbs G721 ADPCM encoding.
    pub const G721_32: Self = Self(sys::SF_FORMAT_G721_32 as FormatRaw);
    /// 24kbs G723 ADPCM encoding.
    pub const G723_24: Self = Self(sys::SF_FORMAT_G723_24 as FormatRaw);
    /// 40kbs G723 ADPCM encoding.
    pub const G723_40: Self = Self(sys::SF_FORMAT_G723_40 as FormatRaw);
    /// 12 bit Delta Width Variable Word encoding.
    pub const DWVW_12: Self = Self(sys::SF_FORMAT_DWVW_12 as FormatRaw);
    /// 16 bit Delta Width Variable Word encoding.
    pub const DWVW_16: Self = Self(sys::SF_FORMAT_DWVW_16 as FormatRaw);
    /// 24 bit Delta Width Variable Word encoding.
    pub const DWVW_24: Self = Self(sys::SF_FORMAT_DWVW_24 as FormatRaw);
    /// N bit Delta Width Variable Word encoding.
    pub const DWVW_N: Self = Self(sys::SF_FORMAT_DWVW_N as FormatRaw);
    /// 8 bit differential PCM (XI only).
    pub const DPCM_8: Self = Self(sys::SF_FORMAT_DPCM_8 as FormatRaw);
    /// 16 bit differential PCM (XI only).
    pub const DPCM_16: Self = Self(sys::SF_FORMAT_DPCM_16 as FormatRaw);
    /// Xiph Vorbis encoding.
    pub const VORBIS: Self = Self(sys::SF_FORMAT_VORBIS as FormatRaw);
    /// Xiph/Skype Opus encoding.
    pub const OPUS: Self = Self(sys::SF_FORMAT_OPUS as FormatRaw);
    /// Apple Lossless Audio Codec (16 bit).
    pub const ALAC_16: Self = Self(sys::SF_FORMAT_ALAC_16 as FormatRaw);
    /// Apple Lossless Audio Codec (20 bit).
    pub const ALAC_20: Self = Self(sys::SF_FORMAT_ALAC_20 as FormatRaw);
    /// Apple Lossless Audio Codec (24 bit).
    pub const ALAC_24: Self = Self(sys::SF_FORMAT_ALAC_24 as FormatRaw);
    /// Apple Lossless Audio Codec (32 bit).
    pub const ALAC_32: Self = Self(sys::SF_FORMAT_ALAC_32 as FormatRaw);
    /// MPEG-1 Audio Layer I.
    pub const MPEG_LAYER_I: Self = Self(sys::SF_FORMAT_MPEG_LAYER_I as FormatRaw);
    /// MPEG-1 Audio Layer II.
    pub const MPEG_LAYER_II: Self = Self(sys::SF_FORMAT_MPEG_LAYER_II as FormatRaw);
    /// MPEG-2 Audio Layer III.
    pub const MPEG_LAYER_III: Self = Self(sys::SF_FORMAT_MPEG_LAYER_III as FormatRaw);

    // Endian-ness options
    /// Default file endian-ness.
    pub const ENDIAN_FILE: Self = Self(sys::SF_ENDIAN_FILE as FormatRaw);
    /// Force little endian-ness.
    pub const ENDIAN_LITTLE: Self = Self(sys::SF_ENDIAN_LITTLE as FormatRaw);
    /// Force big endian-ness.
    pub const ENDIAN_BIG: Self = Self(sys::SF_ENDIAN_BIG as FormatRaw);
    /// Force CPU endian-ness.
    pub const ENDIAN_CPU: Self = Self(sys::SF_ENDIAN_CPU as FormatRaw);

    pub const SUBMASK: Self = Self(sys::SF_FORMAT_SUBMASK as FormatRaw);
    pub const TYPEMASK: Self = Self(sys::SF_FORMAT_TYPEMASK as FormatRaw);
    pub const ENDMASK: Self = Self(sys::SF_FORMAT_ENDMASK as FormatRaw);

    #[inline]
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Create a Format from the raw integer code
    #[inline]
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// The container part of the code.
    #[inline]
    pub const fn major(self) -> Self {
        Self(self.0 & Self::TYPEMASK.0)
    }

    /// The sample encoding part of the code.
    #[inline]
    pub const fn subtype(self) -> Self {
        Self(self.0 & Self::SUBMASK.0)
    }

    #[inline]
    pub const fn endian(self) -> Self {
        Self(self.0 & Self::ENDMASK.0)
    }

    /// Replace the endianness tag, keeping major type and subtype.
    #[inline]
    pub const fn with_endian(self, endian: Self) -> Self {
        Self((self.0 & !Self::ENDMASK.0) | (endian.0 & Self::ENDMASK.0))
    }

    /// Check if all the bits in other are set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the bits in other are set
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0
    }
}

impl core::ops::BitOr for Format {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for Format {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl core::ops::BitAnd for Format {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl core::fmt::LowerHex for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Describes an audio stream: length, rate, channel count and encoding.
///
/// When opening for reading, pass `Info::default()` and libsndfile fills
/// it in. When writing (or reading headerless RAW data) set
/// `sample_rate`, `channels` and `format` first, e.g. with [`Info::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Info {
    /// Length in frames. A frame holds one sample per channel.
    pub frames: i64,
    pub sample_rate: i32,
    pub channels: i32,
    pub format: Format,
    pub sections: i32,
    pub seekable: bool,
}

impl Info {
    pub fn new(sample_rate: i32, channels: i32, format: Format) -> Self {
        Self {
            sample_rate,
            channels,
            format,
            ..Default::default()
        }
    }

    /// See [`format_check`].
    pub fn is_valid(&self) -> bool {
        format_check(self)
    }
}

impl Binding for Info {
    type Raw = sys::SF_INFO;

    fn from_raw(raw: &Self::Raw) -> Self {
        Self {
            frames: raw.frames,
            sample_rate: raw.samplerate,
            channels: raw.channels,
            format: Format::from_bits(raw.format),
            sections: raw.sections,
            seekable: raw.seekable != 0,
        }
    }

    fn to_raw(&self) -> Self::Raw {
        sys::SF_INFO {
            frames: self.frames,
            samplerate: self.sample_rate,
            channels: self.channels,
            format: self.format.bits(),
            sections: self.sections,
            seekable: c_int::from(self.seekable),
        }
    }
}

/// Asks libsndfile whether the descriptor is a valid combination for writing.
///
/// Checks the sample rate, channel count and that the subtype and endianness
/// are supported by the major type.
pub fn format_check(info: &Info) -> bool {
    let raw = info.to_raw();
    unsafe { sys::sf_format_check(&raw) != 0 }
}

/// How a sound file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Read,
    Write,
    ReadWrite,
}

impl From<Mode> for c_int {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Read => sys::SFM_READ as c_int,
            Mode::Write => sys::SFM_WRITE as c_int,
            Mode::ReadWrite => sys::SFM_RDWR as c_int,
        }
    }
}

impl TryFrom<c_int> for Mode {
    type Error = SndfileError;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        match value as u32 {
            sys::SFM_READ => Ok(Mode::Read),
            sys::SFM_WRITE => Ok(Mode::Write),
            sys::SFM_RDWR => Ok(Mode::ReadWrite),
            _ => Err(SndfileError::InvalidArgument("unknown open mode")),
        }
    }
}

/// Reference point of a seek.
///
/// [`SndFile::seek`](crate::SndFile::seek) counts in frames. The
/// [`VirtualIo::seek`](crate::VirtualIo::seek) callback counts in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    Start,
    Current,
    End,
}

impl From<Whence> for c_int {
    fn from(value: Whence) -> Self {
        match value {
            Whence::Start => 0,
            Whence::Current => 1,
            Whence::End => 2,
        }
    }
}

impl TryFrom<c_int> for Whence {
    type Error = SndfileError;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            _ => Err(SndfileError::InvalidArgument("unknown seek whence")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_regions_do_not_overlap() {
        let format = Format::WAV | Format::FLOAT | Format::ENDIAN_BIG;
        assert_eq!(format.major(), Format::WAV);
        assert_eq!(format.subtype(), Format::FLOAT);
        assert_eq!(format.endian(), Format::ENDIAN_BIG);
        assert_eq!(format.bits(), 0x2001_0006);
    }

    #[test]
    fn test_format_with_endian_replaces_tag() {
        let format =
            (Format::AIFF | Format::PCM_16 | Format::ENDIAN_BIG).with_endian(Format::ENDIAN_LITTLE);
        assert_eq!(format.endian(), Format::ENDIAN_LITTLE);
        assert_eq!(format.major(), Format::AIFF);
        assert_eq!(format.subtype(), Format::PCM_16);
    }

    #[test]
    fn test_format_set_helpers() {
        let mut format = Format::WAV;
        assert!(!format.contains(Format::PCM_24));
        format.insert(Format::PCM_24);
        assert!(format.contains(Format::WAV | Format::PCM_24));
        assert!(format.intersects(Format::PCM_24));
        format.remove(Format::PCM_24);
        assert_eq!(format, Format::WAV);
        assert!(Format::default().is_none());
        assert_eq!(format!("{:x}", Format::WAV), "10000");
    }

    #[test]
    fn test_info_raw_conversion() {
        let info = Info {
            frames: 123,
            sample_rate: 48_000,
            channels: 2,
            format: Format::FLAC | Format::PCM_24,
            sections: 1,
            seekable: true,
        };
        let raw = info.to_raw();
        assert_eq!(raw.samplerate, 48_000);
        assert_eq!(raw.seekable, 1);
        assert_eq!(Info::from_raw(&raw), info);
    }

    #[test]
    fn test_format_check() {
        assert!(Info::new(44_100, 2, Format::WAV | Format::PCM_16).is_valid());
        assert!(format_check(&Info::new(8_000, 1, Format::AIFF | Format::FLOAT)));
        // Vorbis only lives in an OGG container.
        assert!(!Info::new(44_100, 1, Format::WAV | Format::VORBIS).is_valid());
        assert!(!Info::new(44_100, 0, Format::WAV | Format::PCM_16).is_valid());
    }

    #[test]
    fn test_mode_and_whence_codes() {
        assert_eq!(c_int::from(Mode::Read), 0x10);
        assert_eq!(c_int::from(Mode::Write), 0x20);
        assert_eq!(c_int::from(Mode::ReadWrite), 0x30);
        assert_eq!(Mode::try_from(0x30).unwrap(), Mode::ReadWrite);
        assert!(Mode::try_from(0).is_err());

        for whence in [Whence::Start, Whence::Current, Whence::End] {
            assert_eq!(Whence::try_from(c_int::from(whence)).unwrap(), whence);
        }
        assert!(matches!(
            Whence::try_from(7),
            Err(SndfileError::InvalidArgument(_))
        ));
    }
}

//! Broadcast Wave (bext) chunk.
use sndfile_sys::ffi as sys;

use crate::{
    command::{command_error, command_ffi, is_true},
    file::SndFile,
    util::{read_fixed, write_fixed},
    Binding, SfResult,
};

/// Capacity of the coding history field.
pub const CODING_HISTORY_LEN: usize = 256;

/// Contents of a bext chunk.
///
/// Text fields have fixed widths in the file (description 256 bytes,
/// originator and originator reference 32, date 10, time 8, umid 64). Longer
/// values are truncated when written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BroadcastInfo {
    pub description: String,
    pub originator: String,
    pub originator_reference: String,
    /// `yyyy-mm-dd` by convention.
    pub origination_date: String,
    /// `hh:mm:ss` by convention.
    pub origination_time: String,
    pub time_reference_low: u32,
    pub time_reference_high: u32,
    pub version: i16,
    pub umid: String,
    pub loudness_value: i16,
    pub loudness_range: i16,
    pub max_true_peak_level: i16,
    pub max_momentary_loudness: i16,
    pub max_shortterm_loudness: i16,
    /// Free text, at most [`CODING_HISTORY_LEN`] bytes. libsndfile appends
    /// its own line when the chunk is written.
    pub coding_history: Vec<u8>,
}

impl BroadcastInfo {
    /// Sample count since midnight of the first sample.
    pub fn time_reference(&self) -> u64 {
        (u64::from(self.time_reference_high) << 32) | u64::from(self.time_reference_low)
    }

    pub fn set_time_reference(&mut self, samples: u64) {
        self.time_reference_low = samples as u32;
        self.time_reference_high = (samples >> 32) as u32;
    }
}

impl Binding for BroadcastInfo {
    type Raw = sys::SF_BROADCAST_INFO;

    fn from_raw(raw: &Self::Raw) -> Self {
        // Some readers leave the size at zero; the field is NUL padded either way.
        let history_len = match raw.coding_history_size as usize {
            0 => CODING_HISTORY_LEN,
            n => n.min(CODING_HISTORY_LEN),
        };
        let coding_history: Vec<u8> = raw.coding_history[..history_len]
            .iter()
            .map(|&c| c as u8)
            .take_while(|&b| b != 0)
            .collect();

        Self {
            description: read_fixed(&raw.description),
            originator: read_fixed(&raw.originator),
            originator_reference: read_fixed(&raw.originator_reference),
            origination_date: read_fixed(&raw.origination_date),
            origination_time: read_fixed(&raw.origination_time),
            time_reference_low: raw.time_reference_low,
            time_reference_high: raw.time_reference_high,
            version: raw.version,
            umid: read_fixed(&raw.umid),
            loudness_value: raw.loudness_value,
            loudness_range: raw.loudness_range,
            max_true_peak_level: raw.max_true_peak_level,
            max_momentary_loudness: raw.max_momentary_loudness,
            max_shortterm_loudness: raw.max_shortterm_loudness,
            coding_history,
        }
    }

    fn to_raw(&self) -> Self::Raw {
        let mut raw = zeroed_raw();
        write_fixed(&mut raw.description, self.description.as_bytes());
        write_fixed(&mut raw.originator, self.originator.as_bytes());
        write_fixed(
            &mut raw.originator_reference,
            self.originator_reference.as_bytes(),
        );
        write_fixed(&mut raw.origination_date, self.origination_date.as_bytes());
        write_fixed(&mut raw.origination_time, self.origination_time.as_bytes());
        raw.time_reference_low = self.time_reference_low;
        raw.time_reference_high = self.time_reference_high;
        raw.version = self.version;
        write_fixed(&mut raw.umid, self.umid.as_bytes());
        raw.loudness_value = self.loudness_value;
        raw.loudness_range = self.loudness_range;
        raw.max_true_peak_level = self.max_true_peak_level;
        raw.max_momentary_loudness = self.max_momentary_loudness;
        raw.max_shortterm_loudness = self.max_shortterm_loudness;

        let history_len = self.coding_history.len().min(CODING_HISTORY_LEN);
        write_fixed(&mut raw.coding_history, &self.coding_history[..history_len]);
        raw.coding_history_size = history_len as u32;
        raw
    }
}

fn zeroed_raw() -> sys::SF_BROADCAST_INFO {
    // SAFETY: plain integers and char arrays; all zero is a valid value.
    unsafe { core::mem::zeroed() }
}

impl SndFile<'_> {
    /// The file's bext chunk, if it has one.
    pub fn broadcast_info(&self) -> SfResult<Option<BroadcastInfo>> {
        let ptr = self.as_ptr()?;
        let mut raw = zeroed_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_BROADCAST_INFO,
            &mut raw,
            core::mem::size_of::<sys::SF_BROADCAST_INFO>(),
        );
        if !is_true(res) {
            return Ok(None);
        }
        Ok(Some(BroadcastInfo::from_raw(&raw)))
    }

    /// Stores a bext chunk. WAV, WAVEX and RF64 files opened for writing only.
    pub fn set_broadcast_info(&mut self, info: &BroadcastInfo) -> SfResult<()> {
        let ptr = self.as_ptr()?;
        let mut raw = info.to_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_BROADCAST_INFO,
            &mut raw,
            core::mem::size_of::<sys::SF_BROADCAST_INFO>(),
        );
        if !is_true(res) {
            return Err(command_error(ptr, "SFC_SET_BROADCAST_INFO"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::{Format, Info, Mode},
        test_assets::temp_file::TempPath,
        SndfileError,
    };

    fn sample_info() -> BroadcastInfo {
        BroadcastInfo {
            description: "gosndfile test data".into(),
            originator: "republic of nynex".into(),
            originator_reference: "http://hydrogenproject.com".into(),
            origination_date: "2011/09/27".into(),
            origination_time: "17:49".into(),
            time_reference_low: 123_456,
            time_reference_high: 7_891_011,
            version: 1,
            umid: "ummm".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_fields_truncate() {
        let mut info = sample_info();
        info.originator = "x".repeat(40);
        info.origination_date = "2011-09-27T00".into();
        info.coding_history = vec![b'h'; 300];

        let raw = info.to_raw();
        let back = BroadcastInfo::from_raw(&raw);
        assert_eq!(back.originator, "x".repeat(32));
        // Fills the field completely, no terminator.
        assert_eq!(back.origination_date, "2011-09-27");
        assert_eq!(back.origination_time, "17:49");
        assert_eq!(raw.coding_history_size as usize, CODING_HISTORY_LEN);
        assert_eq!(back.coding_history.len(), CODING_HISTORY_LEN);
    }

    #[test]
    fn test_time_reference() {
        let mut info = BroadcastInfo::default();
        info.set_time_reference((7 << 32) | 42);
        assert_eq!(info.time_reference_high, 7);
        assert_eq!(info.time_reference_low, 42);
        assert_eq!(info.time_reference(), (7 << 32) | 42);
    }

    #[test]
    fn test_broadcast_round_trip() {
        let path = TempPath::new("bext.wav");
        let expected = sample_info();

        let mut info = Info::new(8000, 1, Format::WAV | Format::PCM_16);
        let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        assert_eq!(file.broadcast_info().unwrap(), None);
        file.set_broadcast_info(&expected).unwrap();
        file.write_items(&[0_i16; 16]).unwrap();
        file.close().unwrap();

        let mut info = Info::default();
        let file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        let got = file.broadcast_info().unwrap().unwrap();
        assert_eq!(got.description, expected.description);
        assert_eq!(got.originator, expected.originator);
        assert_eq!(got.originator_reference, expected.originator_reference);
        assert_eq!(got.origination_date, expected.origination_date);
        assert_eq!(got.origination_time, expected.origination_time);
        assert_eq!(got.time_reference(), expected.time_reference());
        assert_eq!(got.umid, expected.umid);
        // libsndfile writes its own coding history line.
        assert!(!got.coding_history.is_empty());
    }

    #[test]
    fn test_broadcast_unsupported_format() {
        let path = TempPath::new("bext.aiff");
        let mut info = Info::new(8000, 1, Format::AIFF | Format::PCM_16);
        let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        let err = file.set_broadcast_info(&sample_info()).unwrap_err();
        assert!(matches!(
            err,
            SndfileError::Command {
                command: "SFC_SET_BROADCAST_INFO",
                ..
            }
        ));
    }
}

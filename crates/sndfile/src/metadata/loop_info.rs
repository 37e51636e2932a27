//! Acid and Apple Loops tempo information.
use core::ffi::c_int;

use sndfile_sys::ffi as sys;

use crate::{
    command::{command_ffi, is_true},
    file::SndFile,
    Binding, SfResult,
};

/// Tempo and loop description of acidized or Apple Loops files. Read only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopInfo {
    pub time_sig_num: i16,
    pub time_sig_den: i16,
    /// One of the `SF_LOOP_*` values; see [`crate::LoopMode`].
    pub loop_mode: c_int,
    pub num_beats: i32,
    pub bpm: f32,
    /// MIDI note, or -1 when the loop is not pitched.
    pub root_key: i32,
}

impl Binding for LoopInfo {
    type Raw = sys::SF_LOOP_INFO;

    fn from_raw(raw: &Self::Raw) -> Self {
        Self {
            time_sig_num: raw.time_sig_num,
            time_sig_den: raw.time_sig_den,
            loop_mode: raw.loop_mode,
            num_beats: raw.num_beats,
            bpm: raw.bpm,
            root_key: raw.root_key,
        }
    }

    fn to_raw(&self) -> Self::Raw {
        sys::SF_LOOP_INFO {
            time_sig_num: self.time_sig_num,
            time_sig_den: self.time_sig_den,
            loop_mode: self.loop_mode,
            num_beats: self.num_beats,
            bpm: self.bpm,
            root_key: self.root_key,
            future: [0; 6],
        }
    }
}

impl SndFile<'_> {
    pub fn loop_info(&self) -> SfResult<Option<LoopInfo>> {
        let ptr = self.as_ptr()?;
        let mut raw = LoopInfo::default().to_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_LOOP_INFO,
            &mut raw,
            core::mem::size_of::<sys::SF_LOOP_INFO>(),
        );
        if !is_true(res) {
            return Ok(None);
        }
        Ok(Some(LoopInfo::from_raw(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        format::{Format, Info, Mode},
        test_assets::temp_file::TempPath,
    };

    #[test]
    fn test_raw_fields() {
        let info = LoopInfo {
            time_sig_num: 3,
            time_sig_den: 4,
            loop_mode: sys::SF_LOOP_FORWARD as c_int,
            num_beats: 12,
            bpm: 96.5,
            root_key: 60,
        };
        let raw = info.to_raw();
        assert_eq!(raw.future, [0; 6]);
        assert_eq!(LoopInfo::from_raw(&raw), info);
    }

    #[test]
    fn test_plain_file_has_no_loop_info() {
        let path = TempPath::new("noloop.wav");
        let mut info = Info::new(44_100, 1, Format::WAV | Format::PCM_16);
        let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        file.write_items(&[0_i16; 8]).unwrap();
        file.close().unwrap();

        let mut info = Info::default();
        let file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(file.loop_info().unwrap(), None);
    }
}

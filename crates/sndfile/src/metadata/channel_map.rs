//! Per-channel speaker positions.
use core::ffi::c_int;

use sndfile_sys::ffi as sys;

use crate::{
    command::{command_error, command_ffi, is_true},
    file::SndFile,
    SfResult, SndfileError,
};

/// Speaker position assigned to one channel.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelPosition {
    Invalid = sys::SF_CHANNEL_MAP_INVALID as i32,
    Mono = sys::SF_CHANNEL_MAP_MONO as i32,
    Left = sys::SF_CHANNEL_MAP_LEFT as i32,
    Right = sys::SF_CHANNEL_MAP_RIGHT as i32,
    Center = sys::SF_CHANNEL_MAP_CENTER as i32,
    FrontLeft = sys::SF_CHANNEL_MAP_FRONT_LEFT as i32,
    FrontRight = sys::SF_CHANNEL_MAP_FRONT_RIGHT as i32,
    FrontCenter = sys::SF_CHANNEL_MAP_FRONT_CENTER as i32,
    RearCenter = sys::SF_CHANNEL_MAP_REAR_CENTER as i32,
    RearLeft = sys::SF_CHANNEL_MAP_REAR_LEFT as i32,
    RearRight = sys::SF_CHANNEL_MAP_REAR_RIGHT as i32,
    Lfe = sys::SF_CHANNEL_MAP_LFE as i32,
    FrontLeftOfCenter = sys::SF_CHANNEL_MAP_FRONT_LEFT_OF_CENTER as i32,
    FrontRightOfCenter = sys::SF_CHANNEL_MAP_FRONT_RIGHT_OF_CENTER as i32,
    SideLeft = sys::SF_CHANNEL_MAP_SIDE_LEFT as i32,
    SideRight = sys::SF_CHANNEL_MAP_SIDE_RIGHT as i32,
    TopCenter = sys::SF_CHANNEL_MAP_TOP_CENTER as i32,
    TopFrontLeft = sys::SF_CHANNEL_MAP_TOP_FRONT_LEFT as i32,
    TopFrontRight = sys::SF_CHANNEL_MAP_TOP_FRONT_RIGHT as i32,
    TopFrontCenter = sys::SF_CHANNEL_MAP_TOP_FRONT_CENTER as i32,
    TopRearLeft = sys::SF_CHANNEL_MAP_TOP_REAR_LEFT as i32,
    TopRearRight = sys::SF_CHANNEL_MAP_TOP_REAR_RIGHT as i32,
    TopRearCenter = sys::SF_CHANNEL_MAP_TOP_REAR_CENTER as i32,
    AmbisonicBW = sys::SF_CHANNEL_MAP_AMBISONIC_B_W as i32,
    AmbisonicBX = sys::SF_CHANNEL_MAP_AMBISONIC_B_X as i32,
    AmbisonicBY = sys::SF_CHANNEL_MAP_AMBISONIC_B_Y as i32,
    AmbisonicBZ = sys::SF_CHANNEL_MAP_AMBISONIC_B_Z as i32,
}

use ChannelPosition::*;

const ALL_POSITIONS: [ChannelPosition; sys::SF_CHANNEL_MAP_MAX as usize] = [
    Invalid,
    Mono,
    Left,
    Right,
    Center,
    FrontLeft,
    FrontRight,
    FrontCenter,
    RearCenter,
    RearLeft,
    RearRight,
    Lfe,
    FrontLeftOfCenter,
    FrontRightOfCenter,
    SideLeft,
    SideRight,
    TopCenter,
    TopFrontLeft,
    TopFrontRight,
    TopFrontCenter,
    TopRearLeft,
    TopRearRight,
    TopRearCenter,
    AmbisonicBW,
    AmbisonicBX,
    AmbisonicBY,
    AmbisonicBZ,
];

impl From<ChannelPosition> for c_int {
    fn from(value: ChannelPosition) -> Self {
        value as c_int
    }
}

impl TryFrom<c_int> for ChannelPosition {
    type Error = SndfileError;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| ALL_POSITIONS.get(i).copied())
            .ok_or(SndfileError::InvalidArgument("unknown channel position"))
    }
}

impl SndFile<'_> {
    /// One position per channel, or `None` if the file stores no map.
    pub fn channel_map(&self) -> SfResult<Option<Vec<ChannelPosition>>> {
        let ptr = self.as_ptr()?;
        let mut raw = vec![0 as c_int; self.channel_count()];
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_CHANNEL_MAP_INFO,
            raw.as_mut_ptr(),
            core::mem::size_of_val(raw.as_slice()),
        );
        if !is_true(res) {
            return Ok(None);
        }
        let map = raw
            .into_iter()
            .map(|p| ChannelPosition::try_from(p).unwrap_or(Invalid))
            .collect();
        Ok(Some(map))
    }

    /// Assigns speaker positions. `map` needs one entry per channel.
    pub fn set_channel_map(&mut self, map: &[ChannelPosition]) -> SfResult<()> {
        if map.len() != self.channel_count() {
            return Err(SndfileError::InvalidArgument(
                "channel map length must equal the channel count",
            ));
        }
        let ptr = self.as_ptr()?;
        let mut raw: Vec<c_int> = map.iter().map(|&p| p.into()).collect();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_CHANNEL_MAP_INFO,
            raw.as_mut_ptr(),
            core::mem::size_of_val(raw.as_slice()),
        );
        if !is_true(res) {
            return Err(command_error(ptr, "SFC_SET_CHANNEL_MAP_INFO"));
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
    };

    #[test]
    fn test_position_values() {
        for (i, pos) in ALL_POSITIONS.iter().enumerate() {
            assert_eq!(c_int::from(*pos), i as c_int);
            assert_eq!(ChannelPosition::try_from(i as c_int).unwrap(), *pos);
        }
        assert!(ChannelPosition::try_from(-1).is_err());
        assert!(ChannelPosition::try_from(sys::SF_CHANNEL_MAP_MAX as c_int).is_err());
    }

    #[test]
    fn test_map_length_must_match() {
        let path = TempPath::new("map.wav");
        let mut info = Info::new(44_100, 2, Format::WAVEX | Format::PCM_16);
        let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        assert!(matches!(
            file.set_channel_map(&[FrontLeft]),
            Err(SndfileError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wavex_channel_map_round_trip() {
        let path = TempPath::new("map.wav");
        let mut info = Info::new(44_100, 2, Format::WAVEX | Format::PCM_16);
        let mut file = SndFile::open(&path, Mode::Write, &mut info).unwrap();
        file.set_channel_map(&[FrontLeft, FrontRight]).unwrap();
        file.write_items(&[0_i16; 8]).unwrap();
        file.close().unwrap();

        let mut info = Info::default();
        let file = SndFile::open(&path, Mode::Read, &mut info).unwrap();
        assert_eq!(
            file.channel_map().unwrap(),
            Some(vec![FrontLeft, FrontRight])
        );
    }
}

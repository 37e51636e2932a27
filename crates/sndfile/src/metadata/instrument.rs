//! Sampler instrument data (AIFF INST, WAV smpl).
use core::ffi::{c_char, c_int};

use sndfile_sys::ffi as sys;

use crate::{
    command::{command_error, command_ffi, is_true},
    file::SndFile,
    Binding, SfResult, SndfileError,
};

/// Loop slots available in an instrument record.
pub const MAX_LOOPS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopMode {
    #[default]
    None,
    Forward,
    Backward,
    Alternating,
}

impl From<LoopMode> for c_int {
    fn from(value: LoopMode) -> Self {
        let raw = match value {
            LoopMode::None => sys::SF_LOOP_NONE,
            LoopMode::Forward => sys::SF_LOOP_FORWARD,
            LoopMode::Backward => sys::SF_LOOP_BACKWARD,
            LoopMode::Alternating => sys::SF_LOOP_ALTERNATING,
        };
        raw as c_int
    }
}

impl TryFrom<c_int> for LoopMode {
    type Error = SndfileError;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        match value as u32 {
            sys::SF_LOOP_NONE => Ok(LoopMode::None),
            sys::SF_LOOP_FORWARD => Ok(LoopMode::Forward),
            sys::SF_LOOP_BACKWARD => Ok(LoopMode::Backward),
            sys::SF_LOOP_ALTERNATING => Ok(LoopMode::Alternating),
            _ => Err(SndfileError::InvalidArgument("unknown loop mode")),
        }
    }
}

/// A sustain or release loop, positions in frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Loop {
    pub mode: LoopMode,
    pub start: u32,
    pub end: u32,
    /// Play count, zero for infinite.
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instrument {
    pub gain: i32,
    /// MIDI note of the unpitched sample.
    pub basenote: i8,
    /// Fine tuning in cents.
    pub detune: i8,
    pub velocity_lo: i8,
    pub velocity_hi: i8,
    pub key_lo: i8,
    pub key_hi: i8,
    /// At most [`MAX_LOOPS`] entries.
    pub loops: Vec<Loop>,
}

impl Binding for Instrument {
    type Raw = sys::SF_INSTRUMENT;

    fn from_raw(raw: &Self::Raw) -> Self {
        let count = usize::try_from(raw.loop_count).unwrap_or(0).min(MAX_LOOPS);
        let loops = raw.loops[..count]
            .iter()
            .map(|l| Loop {
                // Unknown modes read back as no loop.
                mode: LoopMode::try_from(l.mode).unwrap_or_default(),
                start: l.start,
                end: l.end,
                count: l.count,
            })
            .collect();

        Self {
            gain: raw.gain,
            basenote: raw.basenote as i8,
            detune: raw.detune as i8,
            velocity_lo: raw.velocity_lo as i8,
            velocity_hi: raw.velocity_hi as i8,
            key_lo: raw.key_lo as i8,
            key_hi: raw.key_hi as i8,
            loops,
        }
    }

    /// Loops past [`MAX_LOOPS`] are dropped; [`SndFile::set_instrument`]
    /// rejects them before getting here.
    fn to_raw(&self) -> Self::Raw {
        let unused = sys::SF_INSTRUMENT__bindgen_ty_1 {
            mode: LoopMode::None.into(),
            start: 0,
            end: 0,
            count: 0,
        };
        let mut loops = [unused; MAX_LOOPS];
        for (slot, l) in loops.iter_mut().zip(&self.loops) {
            *slot = sys::SF_INSTRUMENT__bindgen_ty_1 {
                mode: l.mode.into(),
                start: l.start,
                end: l.end,
                count: l.count,
            };
        }

        sys::SF_INSTRUMENT {
            gain: self.gain,
            basenote: self.basenote as c_char,
            detune: self.detune as c_char,
            velocity_lo: self.velocity_lo as c_char,
            velocity_hi: self.velocity_hi as c_char,
            key_lo: self.key_lo as c_char,
            key_hi: self.key_hi as c_char,
            loop_count: self.loops.len().min(MAX_LOOPS) as c_int,
            loops,
        }
    }
}

impl SndFile<'_> {
    pub fn instrument(&self) -> SfResult<Option<Instrument>> {
        let ptr = self.as_ptr()?;
        let mut raw = Instrument::default().to_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_GET_INSTRUMENT,
            &mut raw,
            core::mem::size_of::<sys::SF_INSTRUMENT>(),
        );
        if !is_true(res) {
            return Ok(None);
        }
        Ok(Some(Instrument::from_raw(&raw)))
    }

    /// Stores instrument data. Must precede the first write.
    pub fn set_instrument(&mut self, instrument: &Instrument) -> SfResult<()> {
        if instrument.loops.len() > MAX_LOOPS {
            return Err(SndfileError::InvalidArgument(
                "an instrument holds at most 16 loops",
            ));
        }
        let ptr = self.as_ptr()?;
        let mut raw = instrument.to_raw();
        let res = command_ffi::sf_command(
            ptr,
            sys::SFC_SET_INSTRUMENT,
            &mut raw,
            core::mem::size_of::<sys::SF_INSTRUMENT>(),
        );
        if !is_true(res) {
            return Err(command_error(ptr, "SFC_SET_INSTRUMENT"));
        }
        Ok(())
    }
}

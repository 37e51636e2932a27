//! Metadata records stored alongside the audio: string tags, the broadcast
//! (bext) chunk, sampler instrument data, acid loop info and channel maps.
//!
//! Each record mirrors its native counterpart field for field. Fixed size
//! text fields are truncated silently on write and NUL padded.
pub mod broadcast;
pub mod channel_map;
pub mod instrument;
pub mod loop_info;
pub mod strings;

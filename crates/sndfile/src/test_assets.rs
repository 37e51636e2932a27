pub mod decoded_data {
    #[inline]
    fn assert_valid(channels: usize, frames: usize) {
        assert!(channels > 0, "channels must be > 0");
        assert!(frames > 0, "frames must be > 0");
    }

    /// Interleaved i16.
    pub fn asset_interleaved_i16(channels: usize, frames: usize, base: i16) -> Vec<i16> {
        assert_valid(channels, frames);
        let mut out = Vec::with_capacity(frames * channels);
        for f in 0..frames {
            for c in 0..channels {
                let v = base as i32 + (f as i32) * 1000 + (c as i32);
                out.push(v.clamp(i16::MIN as i32, i16::MAX as i32) as i16);
            }
        }
        out
    }

    /// Interleaved i32 (full-range 32-bit PCM).
    pub fn asset_interleaved_i32(channels: usize, frames: usize, base: i32) -> Vec<i32> {
        assert_valid(channels, frames);
        let mut out = Vec::with_capacity(frames * channels);
        for f in 0..frames {
            for c in 0..channels {
                let v = base
                    .wrapping_add((f as i32).wrapping_mul(1_000_003))
                    .wrapping_add(c as i32);
                out.push(v);
            }
        }
        out
    }

    /// Interleaved f32 in [-1, 1] approx.
    pub fn asset_interleaved_f32(channels: usize, frames: usize, base: f32) -> Vec<f32> {
        assert_valid(channels, frames);
        let mut out = Vec::with_capacity(frames * channels);
        for f in 0..frames {
            for c in 0..channels {
                let v = base + (f as f32) * 0.01 + (c as f32) * 0.001;
                out.push(v.clamp(-1.0, 1.0));
            }
        }
        out
    }

    /// Interleaved f64 in [-1, 1] approx.
    pub fn asset_interleaved_f64(channels: usize, frames: usize, base: f64) -> Vec<f64> {
        assert_valid(channels, frames);
        let mut out = Vec::with_capacity(frames * channels);
        for f in 0..frames {
            for c in 0..channels {
                let v = base + (f as f64) * 0.01 + (c as f64) * 0.001;
                out.push(v.clamp(-1.0, 1.0));
            }
        }
        out
    }
}

// Temporary files removed on drop
pub mod temp_file {
    use std::{
        path::{Path, PathBuf},
        sync::atomic::{AtomicUsize, Ordering},
        time::{SystemTime, UNIX_EPOCH},
    };

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    pub(crate) struct TempPath {
        path: PathBuf,
    }

    pub(crate) fn unique_tmp_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        p.push(format!("sndfile_test_{}_{nanos}_{n}_{name}", std::process::id()));
        p
    }

    impl TempPath {
        pub(crate) fn new(name: &str) -> Self {
            Self {
                path: unique_tmp_path(name),
            }
        }

        pub(crate) fn path(&self) -> &Path {
            &self.path
        }
    }

    impl AsRef<Path> for TempPath {
        fn as_ref(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Build a minimal PCM 16-bit little-endian WAV file.
pub(crate) fn wav_i16_le(channels: u16, sample_rate: u32, samples_interleaved: &[i16]) -> Vec<u8> {
    assert!(channels > 0);
    assert_eq!(samples_interleaved.len() % channels as usize, 0);

    let bits_per_sample: u16 = 16;
    let block_align: u16 = channels * (bits_per_sample / 8);
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_bytes_len: u32 = (samples_interleaved.len() * 2) as u32;

    let riff_chunk_size: u32 = 4 + (8 + 16) + (8 + data_bytes_len);

    let mut out = Vec::with_capacity((8 + riff_chunk_size) as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&riff_chunk_size.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes()); // PCM fmt chunk size
    out.extend_from_slice(&1u16.to_le_bytes()); // AudioFormat = 1 (PCM)
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_bytes_len.to_le_bytes());

    for s in samples_interleaved {
        out.extend_from_slice(&s.to_le_bytes());
    }

    out
}

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]
#![no_std]

#[cfg(feature = "generate-bindings")]
pub mod ffi {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

#[cfg(not(feature = "generate-bindings"))]
pub mod ffi {
    include!("pregen_bindings/bindings.rs");
}

#[cfg(test)]
mod tests {
    use super::ffi;

    #[test]
    fn struct_layouts_match_sndfile_h() {
        assert_eq!(core::mem::size_of::<ffi::SF_INFO>(), 32);
        assert_eq!(core::mem::size_of::<ffi::SF_FORMAT_INFO>(), 24);
        assert_eq!(core::mem::size_of::<ffi::SF_EMBED_FILE_INFO>(), 16);
        assert_eq!(core::mem::size_of::<ffi::SF_LOOP_INFO>(), 44);
        // 16 loop slots of 4 words after the 16-byte header
        assert_eq!(core::mem::size_of::<ffi::SF_INSTRUMENT>(), 16 + 16 * 16);
        // 2 bytes of padding before time_reference_low
        assert_eq!(core::mem::size_of::<ffi::SF_BROADCAST_INFO>(), 864);
    }

    #[test]
    fn format_masks_do_not_overlap() {
        assert_eq!(ffi::SF_FORMAT_SUBMASK & ffi::SF_FORMAT_TYPEMASK, 0);
        assert_eq!(ffi::SF_FORMAT_TYPEMASK & ffi::SF_FORMAT_ENDMASK, 0);
        assert_eq!(ffi::SF_FORMAT_WAV & ffi::SF_FORMAT_TYPEMASK, ffi::SF_FORMAT_WAV);
        assert_eq!(ffi::SF_FORMAT_PCM_16 & ffi::SF_FORMAT_SUBMASK, ffi::SF_FORMAT_PCM_16);
    }
}

#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sqz-rs` is a byte-granular scalable image codec: any prefix of an
//! encoded stream of at least 6 bytes decodes to a valid image, and quality
//! grows monotonically with the number of bytes kept.
//!
//! The codec itself lives in the [`sqz_codec`] crate; this crate re-exports
//! its surface.

pub use sqz_codec::*;

// Re-export the codec crate for qualified access
pub use sqz_codec;

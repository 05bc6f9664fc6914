//! This crate implements SQZ, a byte-granular scalable image codec for the
//! `sqz-rs` project.
//!
//! An encoder ingests an 8-bit grayscale or RGB raster and produces a
//! compressed stream whose every prefix of at least 6 bytes decodes to a
//! valid image; quality grows monotonically with the number of bytes kept.
//! The decoder accepts any truncated prefix and reconstructs the best image
//! representable from the bits received.
//!
//! # Examples
//!
//! ```rust
//! use sqz_codec::{ColorMode, ImageDescriptor, ScanOrder, decode, encode};
//!
//! let descriptor = ImageDescriptor {
//! 	color_mode: ColorMode::Grayscale,
//! 	scan_order: ScanOrder::Raster,
//! 	width: 16,
//! 	height: 16,
//! 	dwt_levels: 1,
//! 	subsampling: false,
//! };
//! let pixels = vec![128u8; 16 * 16];
//!
//! // ample budget: the gray round-trip is bit-exact
//! let stream = encode(&descriptor, &pixels, 1 << 16).unwrap();
//! let image = decode(&stream).unwrap();
//! assert_eq!(image.pixels(), &pixels[..]);
//!
//! // any prefix of at least 6 bytes still decodes to a full-size image
//! let preview = decode(&stream[..stream.len().min(12)]).unwrap();
//! assert_eq!(preview.pixels().len(), pixels.len());
//! ```

pub mod prelude;
pub mod sqz;

// Re-export the codec surface at the crate root for convenience
pub use sqz::error::SqzError;
pub use sqz::{ColorMode, Header, Image, ImageDescriptor, ScanOrder, decode, encode};

//! Prelude module for `sqz_codec`.
//!
//! This module provides a convenient way to import the codec surface in one
//! line.
//!
//! # Examples
//!
//! ```no_run
//! use sqz_codec::prelude::*;
//!
//! let descriptor = ImageDescriptor {
//! 	color_mode: ColorMode::YCoCgR,
//! 	scan_order: ScanOrder::Hilbert,
//! 	width: 64,
//! 	height: 64,
//! 	dwt_levels: 3,
//! 	subsampling: false,
//! };
//! ```

#[doc(inline)]
pub use crate::sqz::{
	// Enums
	ColorMode,
	// Header and descriptor
	Header,
	// Decoded image
	Image,
	ImageDescriptor,
	ScanOrder,
	// Entry points
	decode,
	encode,
};

#[doc(inline)]
pub use crate::sqz::error::SqzError;

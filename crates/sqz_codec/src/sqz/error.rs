//! Error types for SQZ encoding and decoding.

use thiserror::Error;

/// Errors that can occur when encoding or decoding SQZ bitstreams
#[derive(Debug, Error)]
pub enum SqzError {
	/// Not enough data to parse the stream header
	#[error("Insufficient data: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Invalid magic byte
	#[error("Invalid magic byte: expected {expected:#04X}, got {actual:#04X}")]
	InvalidMagic {
		/// Expected magic byte
		expected: u8,
		/// Actual magic byte
		actual: u8,
	},

	/// Image dimensions outside the supported range
	#[error("Invalid dimensions: {width}x{height} (each side must be in [{min}, {max}])")]
	InvalidDimensions {
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
		/// Minimum supported side length
		min: u32,
		/// Maximum supported side length
		max: u32,
	},

	/// Requested wavelet depth is unusable for the image size
	#[error("Image {width}x{height} is too small for any wavelet decomposition")]
	InvalidDwtLevels {
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
	},

	/// Header declares more wavelet levels than the image size allows
	#[error("Corrupt header: {levels} wavelet levels exceeds the maximum of {max}")]
	CorruptDwtLevels {
		/// Wavelet levels declared by the header
		levels: u8,
		/// Maximum levels derivable from the image size
		max: u8,
	},

	/// Raw pixel buffer does not match the descriptor
	#[error("Pixel buffer mismatch: descriptor requires {expected} bytes, got {actual}")]
	PixelBufferMismatch {
		/// Required number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// Output budget cannot hold the stream header
	#[error("Output budget of {budget} bytes cannot hold the {required}-byte header")]
	BudgetTooSmall {
		/// Byte budget supplied by the caller
		budget: usize,
		/// Minimum number of bytes required
		required: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

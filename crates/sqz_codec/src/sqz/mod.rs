//! SQZ byte-granular scalable image codec.
//!
//! ## Overview
//!
//! SQZ compresses 8-bit grayscale or RGB rasters into a bitstream whose every
//! prefix of at least 6 bytes decodes to a valid image, with quality growing
//! monotonically as more bytes arrive. There is no entropy coder: scalability
//! comes from a reversible 5/3 wavelet decomposition, bitplane coding of the
//! subbands with Wavelet Difference Reduction runs, and a schedule that
//! interleaves bitplane passes across planes, levels and orientations by
//! visual importance. Truncating the stream at any byte leaves both encoder
//! and decoder in a consistent state.
//!
//! ## Header (6 bytes, big-endian)
//!
//! | Offset | Bits | Field          | Description                          |
//! |--------|------|----------------|--------------------------------------|
//! | 0      | 8    | `magic`        | 0xA5                                 |
//! | 1      | 16   | `width - 1`    | Image width in pixels                |
//! | 3      | 16   | `height - 1`   | Image height in pixels               |
//! | 5      | 2    | `color_mode`   | Grayscale / YCoCg-R / Oklab / logl1  |
//! | 5      | 3    | `dwt_levels-1` | Wavelet decomposition depth          |
//! | 5      | 2    | `scan_order`   | Raster / Snake / Morton / Hilbert    |
//! | 5      | 1    | `subsampling`  | Delay chroma by one extra round      |
//!
//! ## Payload
//!
//! After the header, the scheduler emits one 4-bit initialization nibble per
//! subband on its first visit (the subband's top bitplane, 0 meaning empty)
//! interleaved with sorting and refinement passes. There is no end marker:
//! the decoder stops when every subband reaches bitplane 0 or the input runs
//! out.

mod band;
mod bits;
mod coder;
mod color;
mod decode;
mod dwt;
mod encode;
pub mod error;
mod oklab;
mod scan;
mod schedule;

use std::fmt::Display;
use std::io::Read;

use serde::{Deserialize, Serialize};

pub use decode::decode;
pub use encode::encode;
use error::SqzError;

mod constants {
	/// Magic byte opening every SQZ stream
	pub const MAGIC: u8 = 0xA5;

	/// Header size in bytes
	pub const HEADER_SIZE: usize = 6;

	/// Smallest supported image side
	pub const MIN_DIMENSION: u32 = 8;

	/// Largest supported image side
	pub const MAX_DIMENSION: u32 = 65535;

	/// Deepest supported wavelet decomposition
	pub const MAX_DWT_LEVELS: u8 = 8;
}

/// Color transforms supported by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorMode {
	/// Single plane, samples biased by 128
	Grayscale = 0,

	/// Reversible YCoCg-R, bit-exact over the integer domain
	YCoCgR = 1,

	/// 12-bit fixed-point Oklab, perceptually uniform but lossy
	Oklab = 2,

	/// Orthonormal RGB rotation with biased luma, lossless within rounding
	LogL1 = 3,
}

impl ColorMode {
	/// Number of coefficient planes this mode produces.
	pub fn plane_count(self) -> u8 {
		match self {
			ColorMode::Grayscale => 1,
			ColorMode::YCoCgR | ColorMode::Oklab | ColorMode::LogL1 => 3,
		}
	}

	/// Bytes per pixel of the packed raw pixel layout.
	pub fn bytes_per_pixel(self) -> usize {
		match self {
			ColorMode::Grayscale => 1,
			ColorMode::YCoCgR | ColorMode::Oklab | ColorMode::LogL1 => 3,
		}
	}

	fn from_bits(bits: u8) -> Self {
		match bits & 3 {
			0 => ColorMode::Grayscale,
			1 => ColorMode::YCoCgR,
			2 => ColorMode::Oklab,
			_ => ColorMode::LogL1,
		}
	}
}

impl Display for ColorMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ColorMode::Grayscale => write!(f, "Grayscale"),
			ColorMode::YCoCgR => write!(f, "YCoCg-R"),
			ColorMode::Oklab => write!(f, "Oklab"),
			ColorMode::LogL1 => write!(f, "logl1"),
		}
	}
}

/// Coefficient scan orders used to seed the significance lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScanOrder {
	/// Row-major
	Raster = 0,

	/// Boustrophedon over a tile grid
	Snake = 1,

	/// Z-order curve
	Morton = 2,

	/// Generalized Hilbert curve
	Hilbert = 3,
}

impl ScanOrder {
	fn from_bits(bits: u8) -> Self {
		match bits & 3 {
			0 => ScanOrder::Raster,
			1 => ScanOrder::Snake,
			2 => ScanOrder::Morton,
			_ => ScanOrder::Hilbert,
		}
	}
}

impl Display for ScanOrder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ScanOrder::Raster => write!(f, "Raster"),
			ScanOrder::Snake => write!(f, "Snake"),
			ScanOrder::Morton => write!(f, "Morton"),
			ScanOrder::Hilbert => write!(f, "Hilbert"),
		}
	}
}

/// Everything the codec needs to know about an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDescriptor {
	/// Color transform applied before the wavelet decomposition
	pub color_mode: ColorMode,

	/// Scan order used to linearize subband coefficients
	pub scan_order: ScanOrder,

	/// Image width in pixels, in [8, 65535]
	pub width: u16,

	/// Image height in pixels, in [8, 65535]
	pub height: u16,

	/// Wavelet decomposition depth, in [1, 8]
	pub dwt_levels: u8,

	/// Delay chroma planes by one extra schedule round
	pub subsampling: bool,
}

impl ImageDescriptor {
	/// Number of coefficient planes, derived from the color mode.
	pub fn plane_count(&self) -> u8 {
		self.color_mode.plane_count()
	}

	/// Size in bytes of the packed raw pixel buffer this descriptor implies.
	pub fn pixel_len(&self) -> usize {
		self.width as usize * self.height as usize * self.color_mode.bytes_per_pixel()
	}

	/// Deepest wavelet decomposition the image size supports. Zero means the
	/// image is too small to encode at all.
	pub fn max_dwt_levels(&self) -> u8 {
		let side = (self.width as u32).min(self.height as u32).max(1);
		let available = side.ilog2().saturating_sub(3);
		available.min(constants::MAX_DWT_LEVELS as u32) as u8
	}

	/// Checks dimensions against the supported range.
	pub fn validate(&self) -> Result<(), SqzError> {
		let (w, h) = (self.width as u32, self.height as u32);
		if w < constants::MIN_DIMENSION || h < constants::MIN_DIMENSION {
			return Err(SqzError::InvalidDimensions {
				width: w,
				height: h,
				min: constants::MIN_DIMENSION,
				max: constants::MAX_DIMENSION,
			});
		}
		Ok(())
	}
}

/// Header structure for SQZ streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	descriptor: ImageDescriptor,
}

impl Header {
	/// Size of the header in bytes
	pub const SIZE: usize = constants::HEADER_SIZE;

	/// Wraps a descriptor for serialization. The descriptor is expected to be
	/// validated and its levels clamped already.
	pub(crate) fn new(descriptor: ImageDescriptor) -> Self {
		Self { descriptor }
	}

	/// Returns the image descriptor carried by this header.
	pub fn descriptor(&self) -> ImageDescriptor {
		self.descriptor
	}

	/// Parses an SQZ header from the given byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Header, SqzError> {
		if data.len() < constants::HEADER_SIZE {
			return Err(SqzError::InsufficientData {
				expected: constants::HEADER_SIZE,
				actual: data.len(),
			});
		}
		if data[0] != constants::MAGIC {
			return Err(SqzError::InvalidMagic {
				expected: constants::MAGIC,
				actual: data[0],
			});
		}
		let width = u16::from_be_bytes([data[1], data[2]]).wrapping_add(1);
		let height = u16::from_be_bytes([data[3], data[4]]).wrapping_add(1);
		let packed = data[5];
		let descriptor = ImageDescriptor {
			color_mode: ColorMode::from_bits(packed >> 6),
			scan_order: ScanOrder::from_bits(packed >> 1),
			width,
			height,
			dwt_levels: ((packed >> 3) & 7) + 1,
			subsampling: packed & 1 != 0,
		};
		descriptor.validate()?;
		if descriptor.dwt_levels > descriptor.max_dwt_levels() {
			return Err(SqzError::CorruptDwtLevels {
				levels: descriptor.dwt_levels,
				max: descriptor.max_dwt_levels(),
			});
		}
		Ok(Header { descriptor })
	}

	/// Reads and parses an SQZ header from any reader.
	///
	/// Useful for inspecting stream properties before committing to a full
	/// decode.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, SqzError> {
		let mut buffer = [0u8; constants::HEADER_SIZE];
		reader.read_exact(&mut buffer)?;
		Self::from_bytes(&buffer)
	}

	/// Serializes the header to its 6-byte wire form.
	pub fn to_bytes(&self) -> [u8; constants::HEADER_SIZE] {
		let d = &self.descriptor;
		let mut bytes = [0u8; constants::HEADER_SIZE];
		bytes[0] = constants::MAGIC;
		bytes[1..3].copy_from_slice(&(d.width - 1).to_be_bytes());
		bytes[3..5].copy_from_slice(&(d.height - 1).to_be_bytes());
		bytes[5] = ((d.color_mode as u8) << 6)
			| ((d.dwt_levels - 1) << 3)
			| ((d.scan_order as u8) << 1)
			| d.subsampling as u8;
		bytes
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let d = &self.descriptor;
		write!(
			f,
			"SQZ Header:\n\
			- Size: {}x{} pixels\n\
			- Color Mode: {}\n\
			- Scan Order: {}\n\
			- DWT Levels: {}\n\
			- Subsampling: {}",
			d.width, d.height, d.color_mode, d.scan_order, d.dwt_levels, d.subsampling,
		)
	}
}

/// A decoded SQZ image
#[derive(Debug)]
pub struct Image {
	descriptor: ImageDescriptor,
	pixels: Vec<u8>,
}

impl Image {
	/// Returns the descriptor recovered from the stream header.
	pub fn descriptor(&self) -> &ImageDescriptor {
		&self.descriptor
	}

	/// Returns the decoded pixels, packed row-major.
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Consumes the image, returning the pixel buffer.
	pub fn into_pixels(self) -> Vec<u8> {
		self.pixels
	}
}

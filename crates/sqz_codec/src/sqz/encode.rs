//! SQZ encoding entry point.
//!
//! The pipeline is: color transform into coefficient planes, forward 5/3
//! lifting per plane, sign-magnitude conversion, then scheduled bitplane
//! coding into the byte budget. Running out of budget mid-payload is not an
//! error; the stream simply ends at the last complete bit and every decoder
//! prefix rule still holds.

use log::debug;

use crate::sqz::band::Subband;
use crate::sqz::bits::{BitWriter, to_sign_magnitude};
use crate::sqz::error::SqzError;
use crate::sqz::{Header, ImageDescriptor, coder, color, constants, dwt, schedule};

/// Encodes `pixels` into a fresh SQZ stream of at most `budget` bytes.
///
/// The descriptor's `dwt_levels` is clamped to what the image size supports;
/// the effective value is recoverable from the emitted header. Pixels are
/// packed row-major, one byte per sample for grayscale and three for the RGB
/// modes.
pub fn encode(
	descriptor: &ImageDescriptor,
	pixels: &[u8],
	budget: usize,
) -> Result<Vec<u8>, SqzError> {
	descriptor.validate()?;
	let max_levels = descriptor.max_dwt_levels();
	let levels = descriptor.dwt_levels.min(max_levels);
	if levels < 1 {
		return Err(SqzError::InvalidDwtLevels {
			width: descriptor.width as u32,
			height: descriptor.height as u32,
		});
	}
	if pixels.len() != descriptor.pixel_len() {
		return Err(SqzError::PixelBufferMismatch {
			expected: descriptor.pixel_len(),
			actual: pixels.len(),
		});
	}
	if budget < Header::SIZE {
		return Err(SqzError::BudgetTooSmall {
			budget,
			required: Header::SIZE,
		});
	}
	let descriptor = ImageDescriptor {
		dwt_levels: levels,
		..*descriptor
	};

	let width = descriptor.width as usize;
	let height = descriptor.height as usize;
	let planes = descriptor.plane_count() as usize;
	let plane_len = width * height;

	let mut coef = vec![0i16; plane_len * planes];
	color::forward(descriptor.color_mode, pixels, &mut coef, plane_len);
	for plane in coef.chunks_exact_mut(plane_len) {
		dwt::forward(plane, width, height, levels);
	}
	let coef: Vec<u16> = coef.iter().map(|&v| to_sign_magnitude(v)).collect();

	let mut bands = schedule::build_subbands(&descriptor);
	let capacity = payload_capacity(budget, plane_len * planes, bands.len());
	let mut writer = BitWriter::new(capacity);
	run_schedule(&descriptor, &mut bands, &coef, &mut writer);

	let mut output = Vec::with_capacity(Header::SIZE + writer.bits_used().div_ceil(8));
	output.extend_from_slice(&Header::new(descriptor).to_bytes());
	output.extend_from_slice(&writer.into_bytes());
	debug!(
		"encoded {}x{} {} as {} bytes (budget {})",
		descriptor.width,
		descriptor.height,
		descriptor.color_mode,
		output.len(),
		budget,
	);
	Ok(output)
}

/// Caps the payload allocation below absurd budgets: a coefficient costs at
/// most one significance event plus one refinement bit per plane pass, and
/// each subband at most one termination event per bitplane.
fn payload_capacity(budget: usize, coefficients: usize, bands: usize) -> usize {
	let worst_case = coefficients * 16 + bands * 160 + 16;
	(budget - constants::HEADER_SIZE).min(worst_case)
}

/// Drives the bitplane schedule until every subband is done or the budget is
/// exhausted.
fn run_schedule(
	descriptor: &ImageDescriptor,
	bands: &mut [Subband],
	coef: &[u16],
	writer: &mut BitWriter,
) {
	let planes = descriptor.plane_count() as usize;
	let per_plane = bands.len() / planes;
	let chroma_start = schedule::chroma_start(descriptor.color_mode, descriptor.subsampling);
	let interleaved = schedule::plane_major_order(bands.len(), per_plane);
	let mut round = 0u32;
	loop {
		let mut done = true;
		let plane_major = planes > 1 && round >= chroma_start;
		for slot in 0..bands.len() {
			let band = &mut bands[if plane_major { interleaved[slot] } else { slot }];
			if band.start_round > round {
				done = false;
				continue;
			}
			if !band.initialized {
				band.initialized = true;
				band.seed_lip(descriptor.scan_order);
				let max = band.max_coefficient(coef);
				let top = if max == 0 { 0 } else { (max as u32).ilog2() };
				if !writer.put_bits(top, 4) {
					return;
				}
				band.bitplane = top;
			}
			if band.bitplane > 0 {
				if !coder::encode_round(band, coef, writer) {
					return;
				}
				if band.bitplane > 0 {
					done = false;
				}
			}
		}
		if done {
			return;
		}
		round += 1;
	}
}

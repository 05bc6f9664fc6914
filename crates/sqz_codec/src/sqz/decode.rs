//! SQZ decoding entry point.
//!
//! Decoding mirrors the encoder's schedule exactly, consuming initialization
//! nibbles and bitplane passes until the input runs out or every subband is
//! finished. A truncated stream is not an error: whatever bitplanes arrived
//! are kept, the unknown low bits of significant coefficients are filled
//! toward a midpoint, and the inverse pipeline reconstructs the best image
//! the received bits can express.

use log::debug;

use crate::sqz::band::{NIL, Subband};
use crate::sqz::bits::{BitReader, from_sign_magnitude};
use crate::sqz::error::SqzError;
use crate::sqz::{Header, Image, ImageDescriptor, coder, color, dwt, schedule};

/// Decodes an SQZ stream, accepting any prefix of at least [`Header::SIZE`]
/// bytes of a valid stream.
pub fn decode(data: &[u8]) -> Result<Image, SqzError> {
	let header = Header::from_bytes(data)?;
	let descriptor = header.descriptor();
	let width = descriptor.width as usize;
	let height = descriptor.height as usize;
	let planes = descriptor.plane_count() as usize;
	let plane_len = width * height;

	let mut coef = vec![0u16; plane_len * planes];
	let mut bands = schedule::build_subbands(&descriptor);
	let mut reader = BitReader::new(&data[Header::SIZE..]);
	run_schedule(&descriptor, &mut bands, &mut coef, &mut reader);
	round_pending_bitplanes(&bands, &mut coef);

	let mut coef: Vec<i16> = coef.iter().map(|&v| from_sign_magnitude(v)).collect();
	for plane in coef.chunks_exact_mut(plane_len) {
		dwt::inverse(plane, width, height, descriptor.dwt_levels);
	}
	let mut pixels = vec![0u8; descriptor.pixel_len()];
	color::inverse(descriptor.color_mode, &coef, &mut pixels, plane_len);
	debug!(
		"decoded {} bytes into {}x{} {}",
		data.len(),
		descriptor.width,
		descriptor.height,
		descriptor.color_mode,
	);
	Ok(Image { descriptor, pixels })
}

/// Mirror of the encoder's schedule walk. A nibble cut off by the end of the
/// stream reads as zero, which marks the subband empty and keeps both sides
/// consistent.
fn run_schedule(
	descriptor: &ImageDescriptor,
	bands: &mut [Subband],
	coef: &mut [u16],
	reader: &mut BitReader,
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
				band.bitplane = reader.get_bits(4).unwrap_or(0);
			}
			if band.bitplane > 0 {
				if !coder::decode_round(band, coef, reader) {
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

/// Fills the uncoded low bits of every still-significant coefficient toward
/// a midpoint, leaving the sign bit alone.
fn round_pending_bitplanes(bands: &[Subband], coef: &mut [u16]) {
	for band in bands {
		if band.bitplane <= 1 {
			continue;
		}
		let fill = ((1u16 << band.bitplane) - 1) ^ 1;
		let mut cur = band.lsp.head;
		while cur != NIL {
			let node = band.nodes[cur as usize];
			coef[band.coef_index(node.x, node.y)] |= fill;
			cur = node.next;
		}
	}
}

//! Static priority schedule and the cross-subband traversal order.
//!
//! Every subband gets a starting round from the tables below: the deepest
//! lowpass band opens the stream, highpass orientations and finer levels
//! follow, and chroma planes are delayed per color mode so luma detail always
//! lands first. The subsampling flag pushes chroma one more round out, which
//! acts as a cheap chroma subsampling equivalent. Composed values span the
//! 0..10 range for realistic settings.
//!
//! Within a global round the traversal has two modes. While only luma is
//! active, bands are visited orientation-major through one plane at a time;
//! once the first chroma round arrives, the walk switches to plane-major so
//! every plane advances a level together. Both sides derive the mode from the
//! tables alone, keeping encoder and decoder in lockstep.

use crate::sqz::band::Subband;
use crate::sqz::{ColorMode, ImageDescriptor};

/// Base starting round per orientation (LL, HL, LH, HH).
const ORIENT_ROUND: [u32; 4] = [0, 1, 1, 2];

/// Additional chroma-plane delay per color mode.
const CHROMA_DELAY: [u32; 4] = [0, 2, 3, 2];

/// First round in which any chroma subband becomes active.
pub(crate) fn chroma_start(mode: ColorMode, subsampling: bool) -> u32 {
	CHROMA_DELAY[mode as usize] + subsampling as u32
}

/// Builds every subband of every plane in orientation-major order: for each
/// plane, depth 0 (deepest) carries LL, HL, LH, HH, finer depths skip LL.
pub(crate) fn build_subbands(descriptor: &ImageDescriptor) -> Vec<Subband> {
	let width = descriptor.width as usize;
	let height = descriptor.height as usize;
	let levels = descriptor.dwt_levels as u32;
	let planes = descriptor.plane_count() as usize;
	let plane_len = width * height;
	let chroma = chroma_start(descriptor.color_mode, descriptor.subsampling);

	let mut bands = Vec::with_capacity(planes * (4 + 3 * (levels as usize - 1)));
	for plane in 0..planes {
		let delay = if plane > 0 { chroma } else { 0 };
		for depth in 0..levels {
			let step = 1usize << (levels - depth);
			let half = step >> 1;
			let orientations = if depth == 0 { 0..4u32 } else { 1..4u32 };
			for orientation in orientations {
				let ox = if orientation & 1 != 0 { half } else { 0 };
				let oy = if orientation & 2 != 0 { half } else { 0 };
				let band_w = (width - ox).div_ceil(step) as u32;
				let band_h = (height - oy).div_ceil(step) as u32;
				bands.push(Subband::new(
					band_w,
					band_h,
					plane * plane_len + oy * width + ox,
					step,
					step * width,
					ORIENT_ROUND[orientation as usize] + depth + delay,
				));
			}
		}
	}
	bands
}

/// Plane-major visit order: the bands of all planes interleaved position by
/// position, used once chroma is active.
pub(crate) fn plane_major_order(total: usize, per_plane: usize) -> Vec<usize> {
	let planes = total / per_plane;
	let mut order = Vec::with_capacity(total);
	for slot in 0..per_plane {
		for plane in 0..planes {
			order.push(plane * per_plane + slot);
		}
	}
	order
}

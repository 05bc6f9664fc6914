//! Benchmark helper utilities for sqz-rs
//!
//! This module generates synthetic raster images for the benchmark suite.
//! The generators are deterministic so runs stay comparable: a smooth
//! gradient standing in for photographic content, and a hash-noise image as
//! the incompressible worst case.

/// Generates a smooth RGB gradient image, packed row-major.
pub fn generate_gradient_rgb(width: u16, height: u16) -> Vec<u8> {
	let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
	for y in 0..height as u32 {
		for x in 0..width as u32 {
			pixels.push((x * 255 / width.max(1) as u32) as u8);
			pixels.push((y * 255 / height.max(1) as u32) as u8);
			pixels.push(((x + y) * 127 / (width as u32 + height as u32)) as u8);
		}
	}
	pixels
}

/// Generates a deterministic noise grayscale image, packed row-major.
pub fn generate_noise_gray(width: u16, height: u16) -> Vec<u8> {
	let mut state = 0x2545_F491u32;
	let mut pixels = Vec::with_capacity(width as usize * height as usize);
	for _ in 0..width as usize * height as usize {
		state ^= state << 13;
		state ^= state >> 17;
		state ^= state << 5;
		pixels.push(state as u8);
	}
	pixels
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Tiny image: 64x64 (4,096 pixels)
	pub const TINY: (u16, u16) = (64, 64);
	/// Small image: 256x256 (65,536 pixels)
	pub const SMALL: (u16, u16) = (256, 256);
	/// Medium image: 512x512 (262,144 pixels)
	pub const MEDIUM: (u16, u16) = (512, 512);
	/// Large image: 1024x768 (786,432 pixels)
	pub const LARGE: (u16, u16) = (1024, 768);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generators_fill_the_raster() {
		let rgb = generate_gradient_rgb(100, 50);
		assert_eq!(rgb.len(), 100 * 50 * 3);
		let gray = generate_noise_gray(100, 50);
		assert_eq!(gray.len(), 100 * 50);
	}

	#[test]
	fn test_generators_are_deterministic() {
		assert_eq!(generate_noise_gray(64, 64), generate_noise_gray(64, 64));
		assert_eq!(generate_gradient_rgb(64, 64), generate_gradient_rgb(64, 64));
	}
}

//! Benchmark suite for the SQZ codec
//!
//! Measures full encode and decode pipelines plus the truncated-budget path
//! that scalable delivery relies on.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sqz_benches::{generate_gradient_rgb, generate_noise_gray, sizes};
use sqz_codec::{ColorMode, Header, ImageDescriptor, ScanOrder, decode, encode};
use std::hint::black_box;

fn gradient_descriptor(width: u16, height: u16) -> ImageDescriptor {
	ImageDescriptor {
		color_mode: ColorMode::YCoCgR,
		scan_order: ScanOrder::Hilbert,
		width,
		height,
		dwt_levels: 3,
		subsampling: false,
	}
}

/// Benchmark encoding of gradient RGB content across sizes
fn bench_encode_gradient(c: &mut Criterion) {
	let mut group = c.benchmark_group("sqz_encode_gradient");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)] {
		let pixels = generate_gradient_rgb(width, height);
		let descriptor = gradient_descriptor(width, height);
		group.throughput(Throughput::Elements(width as u64 * height as u64));
		group.bench_with_input(BenchmarkId::new("encode", name), &pixels, |b, pixels| {
			b.iter(|| {
				let stream = encode(&descriptor, black_box(pixels), 1 << 24);
				black_box(stream)
			});
		});
	}

	group.finish();
}

/// Benchmark decoding at full fidelity and at a tight byte budget
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("sqz_decode");

	let (width, height) = sizes::SMALL;
	let pixels = generate_gradient_rgb(width, height);
	let descriptor = gradient_descriptor(width, height);
	let full = encode(&descriptor, &pixels, 1 << 24).unwrap();

	group.throughput(Throughput::Bytes(full.len() as u64));
	group.bench_function("full_stream", |b| {
		b.iter(|| {
			let image = decode(black_box(&full));
			black_box(image)
		});
	});

	for budget in [512usize, 4096] {
		let prefix = &full[..budget.min(full.len())];
		group.bench_with_input(BenchmarkId::new("truncated", budget), &prefix, |b, prefix| {
			b.iter(|| {
				let image = decode(black_box(prefix));
				black_box(image)
			});
		});
	}

	group.finish();
}

/// Benchmark the incompressible worst case
fn bench_noise_gray(c: &mut Criterion) {
	let mut group = c.benchmark_group("sqz_noise_gray");

	let (width, height) = sizes::SMALL;
	let pixels = generate_noise_gray(width, height);
	let descriptor = ImageDescriptor {
		color_mode: ColorMode::Grayscale,
		scan_order: ScanOrder::Raster,
		width,
		height,
		dwt_levels: 4,
		subsampling: false,
	};

	group.throughput(Throughput::Elements(width as u64 * height as u64));
	group.bench_function("encode", |b| {
		b.iter(|| {
			let stream = encode(&descriptor, black_box(&pixels), 1 << 24);
			black_box(stream)
		});
	});

	let stream = encode(&descriptor, &pixels, 1 << 24).unwrap();
	group.bench_function("decode", |b| {
		b.iter(|| {
			let image = decode(black_box(&stream));
			black_box(image)
		});
	});

	group.finish();
}

/// Benchmark header parsing separately
fn bench_header_parsing(c: &mut Criterion) {
	let mut group = c.benchmark_group("sqz_header");

	let descriptor = gradient_descriptor(640, 480);
	let pixels = generate_gradient_rgb(640, 480);
	let stream = encode(&descriptor, &pixels, 1 << 24).unwrap();

	group.bench_function("parse_header", |b| {
		b.iter(|| {
			let header = Header::from_bytes(black_box(&stream));
			black_box(header)
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_encode_gradient,
	bench_decode,
	bench_noise_gray,
	bench_header_parsing,
);

criterion_main!(benches);

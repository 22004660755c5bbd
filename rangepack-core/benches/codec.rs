use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rangepack_core::{
    compress, decoder::decode_packet, encoder::encode_packet, fec, CompressionMode, FecLevel,
};

const SAMPLE: &str = "Weather holding steady over the ridge, the relay team reports \
all stations check in on schedule and the spare antenna is rigged.";

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for len in [16, 64, 128] {
        let text = &SAMPLE[..len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| compress::compress(black_box(text)));
        });
    }

    group.finish();
}

fn bench_fec_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("fec_encode");
    let message = vec![0x42u8; 100];

    for level in [FecLevel::Low, FecLevel::Medium, FecLevel::High] {
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{level:?}")),
            &level,
            |b, &level| {
                b.iter(|| fec::encode(black_box(&message), level).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_fec_decode_corrupted(c: &mut Criterion) {
    let mut group = c.benchmark_group("fec_decode_corrupted");
    let message = vec![0x42u8; 100];

    for level in [FecLevel::Low, FecLevel::Medium, FecLevel::High] {
        let block = fec::encode(&message, level).unwrap();
        let mut corrupted = block.clone();
        for i in 0..level.max_correctable() {
            corrupted[i * 2] ^= 0x5A;
        }

        group.throughput(Throughput::Bytes(corrupted.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{level:?}")),
            &corrupted,
            |b, data| {
                b.iter(|| fec::decode(black_box(data), level).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));

    group.bench_function("substitution_medium", |b| {
        b.iter(|| {
            let packet =
                encode_packet(SAMPLE, CompressionMode::Substitution, FecLevel::Medium).unwrap();
            let decoded = decode_packet(&packet).unwrap();
            black_box(decoded);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compress,
    bench_fec_encode,
    bench_fec_decode_corrupted,
    bench_round_trip
);
criterion_main!(benches);

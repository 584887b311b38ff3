use criterion::{Criterion, criterion_group, criterion_main};
use tidbytes::access::{op_get_bits, op_set_bits};
use tidbytes::codec::from_byte_list;
use tidbytes::region::Region;
use tidbytes::size::op_concatenate;
use tidbytes::transform::op_reverse;

fn gen_region(bit_count: usize) -> Region {
    let total_bytes = (bit_count + 7) / 8;
    let mut data = Vec::with_capacity(total_bytes);

    // Deterministic but non-trivial pattern
    for i in 0..total_bytes {
        data.push((i * 31 % 256) as u8);
    }

    from_byte_list(&data, bit_count)
}

fn bench_region_ops(c: &mut Criterion) {
    for &bit_count in &[8usize, 64, 1024, 4096] {
        let region = gen_region(bit_count);
        let payload = gen_region(bit_count / 2);

        c.bench_function(&format!("reverse_{}_bits", bit_count), |b| {
            b.iter(|| op_reverse(&region))
        });

        c.bench_function(&format!("get_bits_{}_bits", bit_count), |b| {
            b.iter(|| op_get_bits(&region, bit_count / 4, bit_count / 4 + bit_count / 2).unwrap())
        });

        c.bench_function(&format!("set_bits_{}_bits", bit_count), |b| {
            b.iter(|| op_set_bits(&region, bit_count / 4, &payload).unwrap())
        });

        c.bench_function(&format!("concatenate_{}_bits", bit_count), |b| {
            b.iter(|| op_concatenate(&region, &payload))
        });
    }
}

criterion_group!(benches, bench_region_ops);
criterion_main!(benches);

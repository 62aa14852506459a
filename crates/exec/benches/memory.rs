use criterion::{criterion_group, criterion_main, Criterion};
use sevm_exec::{Memory, TreeMemory};

fn memory(c: &mut Criterion) {
    let mut g = c.benchmark_group("memory");

    g.bench_function("set_word (8 byte, 4 KiB window)", |b| {
        let mut memory = TreeMemory::default();
        let mut offset = 0i64;
        b.iter(|| {
            memory.set_word(offset % 4096, 8, 0xDEAD_BEEF).unwrap();
            offset += 8;
        });
    });

    g.bench_function("get_word (8 byte)", |b| {
        let mut memory = TreeMemory::default();
        for offset in (0..4096).step_by(8) {
            memory.set_word(offset as i64, 8, offset as u64).unwrap();
        }
        b.iter(|| memory.get_word(1024, 8).unwrap());
    });

    g.bench_function("byte fill + range clear", |b| {
        b.iter(|| {
            let mut memory = TreeMemory::default();
            for offset in 0..256 {
                memory.set_byte(offset, offset as u8).unwrap();
            }
            memory.clear_range(0, 256).unwrap();
        });
    });

    g.finish();
}

criterion_group!(benches, memory);
criterion_main!(benches);

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use fraktor_text_queue_rs::TextQueue;

const SIZES: [usize; 3] = [64, 1_024, 16_384];

fn filled_queue(len: usize) -> TextQueue {
  let mut queue = TextQueue::new();
  // deterministic scramble so the sort has real work to do
  let mut state = 0x2545_f491_u32;
  for _ in 0..len {
    state ^= state << 13;
    state ^= state >> 17;
    state ^= state << 5;
    queue.insert_tail(&format!("{state:08x}")).expect("insert");
  }
  queue
}

fn bench_insert(c: &mut Criterion) {
  let mut group = c.benchmark_group("text_queue_insert");
  for len in SIZES {
    group.bench_with_input(BenchmarkId::new("insert_tail", len), &len, |b, &len| {
      b.iter(|| filled_queue(len));
    });
    group.bench_with_input(BenchmarkId::new("insert_head", len), &len, |b, &len| {
      b.iter(|| {
        let mut queue = TextQueue::new();
        for _ in 0..len {
          queue.insert_head("value").expect("insert");
        }
        queue
      });
    });
  }
  group.finish();
}

fn bench_reorder(c: &mut Criterion) {
  let mut group = c.benchmark_group("text_queue_reorder");
  for len in SIZES {
    group.bench_with_input(BenchmarkId::new("sort", len), &len, |b, &len| {
      b.iter_batched(|| filled_queue(len), |mut queue| queue.sort(), BatchSize::SmallInput);
    });
    group.bench_with_input(BenchmarkId::new("reverse", len), &len, |b, &len| {
      b.iter_batched(|| filled_queue(len), |mut queue| queue.reverse(), BatchSize::SmallInput);
    });
  }
  group.finish();
}

fn bench_drain(c: &mut Criterion) {
  c.bench_function("text_queue_drain_1024", |b| {
    b.iter_batched(
      || filled_queue(1_024),
      |mut queue| {
        let mut out = [0_u8; 16];
        while queue.remove_head_into(&mut out).is_ok() {}
      },
      BatchSize::SmallInput,
    );
  });
}

criterion_group!(benches, bench_insert, bench_reorder, bench_drain);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bracket::guard::{GuardEvent, ScopedGuard};
use bracket::kind::{BlockError, ErrorKind};
use bracket::policy::SuppressionPolicy;
use bracket::puzzles::fibonacci;

fn quiet(policy: SuppressionPolicy) -> ScopedGuard {
    ScopedGuard::new(policy).with_sink(|_: &GuardEvent| ())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("guard ok", |b| {
        b.iter(|| quiet(SuppressionPolicy::None).run(|_| Ok::<_, BlockError>(black_box(1))))
    });
    c.bench_function("guard suppress all", |b| {
        b.iter(|| quiet(SuppressionPolicy::All).run(|_| Err::<(), _>(BlockError::generic("x"))))
    });
    let kinds: Vec<ErrorKind> = (0..100).map(|n| ErrorKind::custom(format!("kind{n}"))).collect();
    let wide = SuppressionPolicy::from_kinds(kinds.into_iter().chain([ErrorKind::Key]));
    c.bench_function("guard suppress set 101", |b| {
        b.iter(|| quiet(wide.clone()).run(|_| Err::<(), _>(BlockError::key("k"))))
    });
    c.bench_function("policy parse", |b| {
        b.iter(|| black_box("IndexError, KeyError, ValueError").parse::<SuppressionPolicy>())
    });
    c.bench_function("fib 20", |b| b.iter(|| fibonacci(black_box(20))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

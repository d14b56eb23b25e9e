use catena::format::render;
use catena::prelude::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn positional_access(c: &mut Criterion) {
    let list = (1u64, 2.5f64, "payload", 4u32).into_list();
    let tuple = (1u64, 2.5f64, "payload", 4u32);

    // These two should be indistinguishable: `get` is a chain of field
    // projections once the recursion is resolved.
    c.bench_function("select_last_position", |b| {
        b.iter(|| *black_box(&list).get::<3>())
    });
    c.bench_function("native_field_access", |b| b.iter(|| black_box(&tuple).3));
}

fn directive_rendering(c: &mut Criterion) {
    c.bench_function("render_two_directives", |b| {
        b.iter(|| {
            render(
                "Hello, %s! You have %d new messages.",
                (black_box("Alice"), black_box(5)),
            )
        })
    });
}

criterion_group!(benches, positional_access, directive_rendering);
criterion_main!(benches);

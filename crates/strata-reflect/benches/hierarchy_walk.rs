use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strata_reflect::filters::by_name;
use strata_reflect::{do_with_methods, do_with_methods_matching, is_cglib_renamed_name, MethodInfo, VisitError};
use strata_types::{TypeId, TypeRegistry};

fn class_chain(depth: usize, methods_per_type: usize) -> (TypeRegistry, TypeId) {
    let mut registry = TypeRegistry::new();
    let mut last = registry.define_class("T0", None).unwrap();
    for level in 1..depth {
        let parent = format!("T{}", level - 1);
        last = registry.define_class(&format!("T{}", level), Some(parent.as_str())).unwrap();
    }
    for id in 0..depth {
        for m in 0..methods_per_type {
            registry.add_method(TypeId(id), MethodInfo::new(format!("m{}", m))).unwrap();
        }
    }
    (registry, last)
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for depth in [4, 16, 64] {
        let (registry, leaf) = class_chain(depth, 16);
        let ty = registry.type_ref(leaf).unwrap();

        group.bench_with_input(BenchmarkId::new("all", depth), &ty, |b, ty| {
            b.iter(|| {
                let mut count = 0usize;
                do_with_methods(black_box(ty), &mut |_: &MethodInfo| -> Result<(), VisitError> {
                    count += 1;
                    Ok(())
                })
                .unwrap();
                count
            });
        });

        let filter = by_name("m3");
        group.bench_with_input(BenchmarkId::new("by_name", depth), &ty, |b, ty| {
            b.iter(|| {
                let mut count = 0usize;
                do_with_methods_matching(
                    black_box(ty),
                    &mut |_: &MethodInfo| -> Result<(), VisitError> {
                        count += 1;
                        Ok(())
                    },
                    &filter,
                )
                .unwrap();
                count
            });
        });
    }

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    c.bench_function("is_cglib_renamed_name", |b| {
        b.iter(|| {
            is_cglib_renamed_name(black_box("CGLIB$findById$12"))
                && !is_cglib_renamed_name(black_box("findById"))
        });
    });
}

criterion_group!(benches, bench_walk, bench_classifier);
criterion_main!(benches);

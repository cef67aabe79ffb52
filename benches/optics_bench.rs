//! Benchmark for optic updates and folds.
//!
//! Compares updates made through composed optics against the equivalent
//! hand-written match-and-rebuild code.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use focal::optics::{Optional, Prism, Traversal, some, traversal};
use focal::typeclass::{OptionContext, Sum};
use focal::{lens, prism};
use std::hint::black_box;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Order {
    id: u64,
    lines: Vec<Line>,
}

#[derive(Clone, PartialEq, Debug)]
struct Line {
    payment: Payment,
}

#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card(i64),
    Cash(i64),
}

fn orders(size: usize) -> Vec<Order> {
    (0..size)
        .map(|position| Order {
            id: position as u64,
            lines: (0..4)
                .map(|line: u32| Line {
                    payment: if line % 2 == 0 {
                        Payment::Card(i64::from(line) * 100)
                    } else {
                        Payment::Cash(i64::from(line))
                    },
                })
                .collect(),
        })
        .collect()
}

// =============================================================================
// Single focus: prism + lens vs manual rebuild
// =============================================================================

fn benchmark_single_focus(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("single_focus_update");

    let order = Some(Order {
        id: 1,
        lines: vec![Line {
            payment: Payment::Card(10),
        }],
    });
    let id = some::<Order>().prop(lens!(Order, id));

    group.bench_function("optic", |bencher| {
        bencher.iter(|| black_box(id.modify(black_box(order.clone()), |id| id + 1)));
    });

    group.bench_function("manual", |bencher| {
        bencher.iter(|| {
            black_box(black_box(order.clone()).map(|order| Order {
                id: order.id + 1,
                ..order
            }))
        });
    });

    group.finish();
}

// =============================================================================
// Nested traversal: modify and fold
// =============================================================================

fn benchmark_nested_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("nested_card_amounts");

    let card_amounts = traversal::from_traversable::<Vec<Order>>()
        .prop(lens!(Order, lines))
        .traverse()
        .prop(lens!(Line, payment))
        .compose_prism(prism!(Payment, Card));

    for size in [10, 100, 1000] {
        let input = orders(size);

        group.bench_with_input(BenchmarkId::new("modify_optic", size), &input, |bencher, input| {
            bencher.iter(|| black_box(card_amounts.modify(input.clone(), |amount| amount + 1)));
        });

        group.bench_with_input(BenchmarkId::new("modify_manual", size), &input, |bencher, input| {
            bencher.iter(|| {
                let updated: Vec<Order> = input
                    .clone()
                    .into_iter()
                    .map(|order| Order {
                        lines: order
                            .lines
                            .into_iter()
                            .map(|line| match line.payment {
                                Payment::Card(amount) => Line {
                                    payment: Payment::Card(amount + 1),
                                },
                                Payment::Cash(_) => line,
                            })
                            .collect(),
                        ..order
                    })
                    .collect();
                black_box(updated)
            });
        });

        group.bench_with_input(BenchmarkId::new("fold_map_sum", size), &input, |bencher, input| {
            bencher.iter(|| black_box(card_amounts.fold_map(input.clone(), Sum)));
        });

        group.bench_with_input(BenchmarkId::new("modify_f_option", size), &input, |bencher, input| {
            bencher.iter(|| {
                black_box(
                    card_amounts
                        .modify_f::<OptionContext, _>(input.clone(), |amount| amount.checked_mul(2)),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_focus, benchmark_nested_traversal);
criterion_main!(benches);

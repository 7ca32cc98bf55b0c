use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tgbot::prelude::*;

fn text_keyboard(rows: usize, cols: usize) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup::new(
        (0..rows).map(|r| (0..cols).map(move |c| format!("{}:{}", r, c))),
    )
}

fn mixed_keyboard(rows: usize, cols: usize) -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup::new((0..rows).map(|r| {
        (0..cols).map(move |c| {
            if c % 2 == 0 {
                Button::from(format!("{}:{}", r, c))
            } else {
                KeyboardButton::contact(format!("{}:{}", r, c)).into()
            }
        })
    }))
    .with_resize_keyboard(true)
}

fn benchmark_to_dict(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReplyKeyboardMarkup to_dict");

    let small = text_keyboard(2, 2);
    group.bench_function("text_2x2", |b| {
        b.iter(|| black_box(black_box(&small).to_dict()))
    });

    let large = text_keyboard(10, 8);
    group.bench_function("text_10x8", |b| {
        b.iter(|| black_box(black_box(&large).to_dict()))
    });

    let mixed = mixed_keyboard(10, 8);
    group.bench_function("mixed_10x8", |b| {
        b.iter(|| black_box(black_box(&mixed).to_dict()))
    });

    group.finish();
}

fn benchmark_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReplyKeyboardMarkup to_json");

    let mixed = mixed_keyboard(10, 8);
    group.bench_function("mixed_10x8", |b| {
        b.iter(|| black_box(black_box(&mixed).to_json()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_to_dict, benchmark_to_json);
criterion_main!(benches);

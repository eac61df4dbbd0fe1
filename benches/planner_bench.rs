// ABOUTME: Criterion benchmarks for the nutrition planning pipeline
// ABOUTME: Measures energy math, meal filling, full weekly plans and food substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition planner.
//!
//! Covers the per-day energy calculation, the greedy meal fill, whole-week
//! generation across meal counts, and single-food substitution.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::collections::BTreeSet;

use chrono::Weekday;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::catalog::FoodCatalog;
use nutriplan::config::NutritionConfig;
use nutriplan::intelligence::meal_allocator::generate_meal_foods;
use nutriplan::intelligence::NutritionPlanner;
use nutriplan::models::{
    ActivitySession, ActivityType, DayActivity, FoodRecord, Goal, MacroGrams, Sex, UserProfile,
    WeeklyActivity,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_profile(meals_per_day: u8) -> UserProfile {
    UserProfile::new(Sex::Male, 80.0, 180.0, 25, Goal::Maintain)
        .with_steps(8000)
        .with_meals_per_day(meals_per_day)
}

fn bench_week() -> WeeklyActivity {
    WeeklyActivity::from_fn(|day| match day {
        Weekday::Mon | Weekday::Fri => DayActivity::single(day, ActivityType::StrengthTraining, 60),
        Weekday::Tue => DayActivity::single(day, ActivityType::Running, 45),
        Weekday::Thu => DayActivity::new(
            day,
            vec![
                ActivitySession::new(ActivityType::StrengthTraining, 60),
                ActivitySession::new(ActivityType::Swimming, 30),
            ],
        )
        .unwrap(),
        _ => DayActivity::rest(day),
    })
}

fn bench_day_energy(c: &mut Criterion) {
    let planner = NutritionPlanner::default();
    let profile = bench_profile(5);
    let week = bench_week();

    c.bench_function("day_energy_week", |b| {
        b.iter(|| {
            for day in week.days() {
                black_box(planner.day_energy(black_box(&profile), black_box(day)).unwrap());
            }
        });
    });
}

fn bench_meal_fill(c: &mut Criterion) {
    let config = NutritionConfig::default().meal_allocation;
    let catalog = FoodCatalog::standard();
    let foods: Vec<&FoodRecord> = catalog.foods().iter().collect();
    let target = MacroGrams::new(40.0, 85.0, 18.0);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("generate_meal_foods", |b| {
        b.iter(|| generate_meal_foods(black_box(&target), &foods, &config, &mut rng));
    });
}

fn bench_weekly_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_plan");
    let planner = NutritionPlanner::default();
    let week = bench_week();

    for meals_per_day in 3..=6_u8 {
        let profile = bench_profile(meals_per_day);
        group.throughput(Throughput::Elements(u64::from(meals_per_day) * 7));
        group.bench_with_input(
            BenchmarkId::new("meals_per_day", meals_per_day),
            &profile,
            |b, profile| {
                let mut seed = 0_u64;
                b.iter(|| {
                    seed = seed.wrapping_add(1);
                    planner
                        .generate_weekly_plan_seeded(black_box(profile), &week, seed)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_restricted_plan(c: &mut Criterion) {
    let planner = NutritionPlanner::default();
    let week = bench_week();
    let profile = bench_profile(5)
        .with_allergy("gluten")
        .with_allergy("lactose")
        .with_allergy("fish");

    c.bench_function("weekly_plan_with_allergies", |b| {
        b.iter(|| {
            planner
                .generate_weekly_plan_seeded(black_box(&profile), &week, 7)
                .unwrap()
        });
    });
}

fn bench_substitution(c: &mut Criterion) {
    let planner = NutritionPlanner::default();
    let plan = planner
        .generate_weekly_plan_seeded(&bench_profile(5), &bench_week(), 3)
        .unwrap();
    let meal = &plan.days[0].meals[2];
    let original = &meal.foods()[0];
    let replacement = planner
        .catalog()
        .alternatives(original.category, &original.name, &BTreeSet::new(), &[])
        .into_iter()
        .next()
        .unwrap()
        .clone();

    c.bench_function("substitute_food", |b| {
        b.iter(|| {
            planner
                .substitute_food(
                    black_box(meal),
                    0,
                    black_box(&replacement),
                    original.category,
                )
                .unwrap()
        });
    });

    c.bench_function("detect_category", |b| {
        b.iter(|| planner.catalog().detect_category(black_box("pechuga a la plancha")));
    });
}

criterion_group!(
    benches,
    bench_day_energy,
    bench_meal_fill,
    bench_weekly_plan,
    bench_restricted_plan,
    bench_substitution
);
criterion_main!(benches);

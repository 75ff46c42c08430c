//! Performance benchmarks for the roster engine.
//!
//! This benchmark suite verifies that the recomputation pipeline stays well
//! inside interactive-edit latency: every cell edit re-runs the full
//! aggregation, so a month-sized grid must recompute in well under a
//! millisecond.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use roster_engine::api::{AppState, create_router};
use roster_engine::calculation::recompute_all;
use roster_engine::config::ConfigLoader;
use roster_engine::models::{DayCell, Employee, RosterGrid, StoreProfile, WorkInterval};

use axum::{body::Body, http::Request};
use chrono::NaiveTime;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/demo_store").expect("Failed to load config");
    AppState::new(config)
}

/// Builds a fully keyed September grid for the given employee count.
fn create_full_grid(employee_count: usize) -> RosterGrid {
    let store = StoreProfile {
        name: "Negozio Centro".to_string(),
        working_days_per_week: 6,
    };
    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| Employee {
            id: format!("emp_{:03}", i + 1),
            label: format!("Employee {}", i + 1),
            contracted_weekly_hours: Decimal::new(40, 0),
            overrides: vec![],
        })
        .collect();

    let mut grid = RosterGrid::new(store, 2025, 9, employees).expect("valid grid");
    let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    for day in 0..grid.days.len() {
        for cell in grid.days[day].cells.iter_mut() {
            *cell = DayCell::Work(WorkInterval {
                start,
                end,
                break_applied: true,
            });
        }
        grid.days[day].revenue = Some(Decimal::new(45050, 2));
    }
    grid
}

/// Builds a recompute request snapshot with the given employee count.
fn create_request_json(employee_count: usize) -> String {
    let employees: Vec<serde_json::Value> = (0..employee_count)
        .map(|i| {
            serde_json::json!({
                "id": format!("emp_{:03}", i + 1),
                "label": format!("Employee {}", i + 1),
                "contracted_weekly_hours": "40",
                "overrides": []
            })
        })
        .collect();

    let days: Vec<serde_json::Value> = (1..=30u32)
        .map(|day| {
            let cells: Vec<serde_json::Value> = (0..employee_count)
                .map(|_| {
                    serde_json::json!({
                        "kind": "work",
                        "start": "09:00",
                        "end": "17:00",
                        "break_applied": true
                    })
                })
                .collect();
            serde_json::json!({
                "day": day,
                "cells": cells,
                "revenue": "450.50"
            })
        })
        .collect();

    serde_json::json!({
        "year": 2025,
        "month": 9,
        "employees": employees,
        "days": days,
        "prior_month_differences": []
    })
    .to_string()
}

/// Benchmark: direct library recompute of a full month.
fn bench_recompute_all(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/demo_store").expect("Failed to load config");
    let reasons = config.reasons().clone();

    let mut group = c.benchmark_group("recompute_all");
    for employee_count in [1usize, 5, 15] {
        let grid = create_full_grid(employee_count);
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let mut working = grid.clone();
                    recompute_all(&mut working, &reasons).expect("recompute");
                    black_box(working)
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: the `/recompute` endpoint end to end.
fn bench_recompute_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let mut group = c.benchmark_group("recompute_endpoint");
    for employee_count in [1usize, 10] {
        let body = create_request_json(employee_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &body,
            |b, body| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/recompute")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_recompute_all, bench_recompute_endpoint);
criterion_main!(benches);

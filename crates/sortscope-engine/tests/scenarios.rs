//! End-to-end scenarios for the engine's public surface.
//!
//! Covers:
//! - The concrete runs every caller relies on (bubble, merge, quick, radix, selection)
//! - Early exit of bubble and cocktail sort on sorted input
//! - Memory accounting along the whole log
//! - Replay equivalence and non-mutation of the input

use sortscope_core::{ActionKind, Algorithm, MemoryOp};
use sortscope_engine::{replay, Engine, EngineConfig, Replay};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn run(id: &str, input: &[f64]) -> sortscope_core::RunResult {
    Engine::new(EngineConfig::default())
        .run(id, input)
        .expect("input is inside the documented domain")
}

fn count(result: &sortscope_core::RunResult, kind: ActionKind) -> usize {
    result.actions.iter().filter(|a| a.kind == kind).count()
}

// ---------------------------------------------------------------------------
// 1. Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn bubble_first_comparison_is_the_first_pair() {
    let result = run("bubble", &[5.0, 3.0, 1.0, 4.0, 2.0]);
    assert_eq!(result.sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let first = result
        .actions
        .iter()
        .find(|a| a.kind == ActionKind::Compare)
        .expect("bubble sort compares");
    assert_eq!(first.touches(), &[0, 1]);
}

#[test]
fn merge_of_two_allocates_one_pair() {
    let result = run("merge", &[2.0, 1.0]);
    assert_eq!(result.sorted, vec![1.0, 2.0]);

    let memory: Vec<_> = result
        .actions
        .iter()
        .filter_map(|a| a.memory_op().map(|op| (op, a.size)))
        .collect();
    assert_eq!(
        memory,
        vec![
            (MemoryOp::Allocate, Some(1)),
            (MemoryOp::Allocate, Some(1)),
            (MemoryOp::Deallocate, Some(1)),
            (MemoryOp::Deallocate, Some(1)),
        ]
    );
}

#[test]
fn quick_on_empty_input_logs_nothing() {
    let result = run("quick", &[]);
    assert!(result.sorted.is_empty());
    assert!(result.actions.is_empty());
}

#[test]
fn radix_textbook_input() {
    let result = run("radix", &[170.0, 45.0, 75.0, 90.0, 802.0, 24.0, 2.0, 66.0]);
    assert_eq!(
        result.sorted,
        vec![2.0, 24.0, 45.0, 66.0, 75.0, 90.0, 170.0, 802.0]
    );
}

#[test]
fn selection_on_sorted_input() {
    let mut engine = Engine::default();
    let result = engine.run("selection", &[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(result.sorted, vec![1.0, 2.0, 3.0]);
    assert_eq!(count(&result, ActionKind::Swap), 0);

    let stats = engine.stats().unwrap();
    assert_eq!(stats.comparisons, 3);
    assert_eq!(stats.swaps, 0);
}

#[test]
fn trivial_inputs_are_returned_unchanged() {
    for algorithm in Algorithm::ALL {
        for input in [vec![], vec![7.0]] {
            let result = Engine::default().run_algorithm(algorithm, &input).unwrap();
            assert_eq!(result.sorted, input, "{}", algorithm);
            assert_eq!(result.stats.comparisons, 0, "{}", algorithm);
            assert_eq!(result.stats.swaps, 0, "{}", algorithm);
            assert_eq!(result.stats.peak_memory, 0, "{}", algorithm);
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Early exit
// ---------------------------------------------------------------------------

#[test]
fn bubble_and_cocktail_exit_after_one_clean_pass() {
    let input: Vec<f64> = (0..20).map(f64::from).collect();
    for id in ["bubble", "cocktail"] {
        let result = run(id, &input);
        assert_eq!(result.stats.comparisons, 19, "{}", id);
        assert_eq!(result.stats.swaps, 0, "{}", id);
    }
}

// ---------------------------------------------------------------------------
// 3. Memory accounting
// ---------------------------------------------------------------------------

#[test]
fn running_totals_match_prefix_sums() {
    let input = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0, 0.0];
    for id in ["merge", "quick"] {
        let result = run(id, &input);
        let mut current = 0usize;
        let mut peak = 0usize;
        for action in &result.actions {
            match action.kind {
                ActionKind::MemoryAlloc => current += action.size.unwrap(),
                ActionKind::MemoryFree => current -= action.size.unwrap(),
                _ => continue,
            }
            peak = peak.max(current);
            assert_eq!(action.running_total, Some(current), "{}", id);
        }
        assert_eq!(current, 0, "{} leaked memory", id);
        assert_eq!(result.stats.peak_memory, peak, "{}", id);
        assert_eq!(result.stats.current_memory, 0, "{}", id);
        assert_eq!(
            result.stats.memory_timeline.len(),
            result.actions.iter().filter(|a| a.is_memory()).count()
        );
    }
}

#[test]
fn in_place_algorithms_never_allocate() {
    let input = [4.0, 2.0, 9.0, 1.0, 1.0, 6.0];
    let in_place = [
        "bubble",
        "insertion",
        "selection",
        "heap",
        "shell",
        "comb",
        "cocktail",
        "radix",
    ];
    for id in in_place {
        let result = run(id, &input);
        assert_eq!(result.stats.peak_memory, 0, "{}", id);
    }
}

// ---------------------------------------------------------------------------
// 4. Replay
// ---------------------------------------------------------------------------

#[test]
fn replay_reproduces_every_algorithm() {
    let input = [12.0, 3.0, 3.0, 40.0, 0.0, 7.0, 19.0, 7.0, 1.0];
    for algorithm in Algorithm::ALL {
        let result = Engine::default().run_algorithm(algorithm, &input).unwrap();
        let (sorted, stats) = replay(&input, &result.actions).unwrap();
        assert_eq!(sorted, result.sorted, "{}", algorithm);
        assert_eq!(stats, result.stats, "{}", algorithm);
    }
}

#[test]
fn replay_midway_shows_partial_progress() {
    let input = [3.0, 2.0, 1.0];
    let result = run("bubble", &input);
    let mut cursor = Replay::new(&input, &result.actions).unwrap();

    // First pass: compare(0,1) + swap, compare(1,2) + swap.
    cursor.seek(8);
    assert_eq!(cursor.current(), &[2.0, 1.0, 3.0]);
    assert_eq!(cursor.stats().swaps, 2);

    cursor.run_to_end();
    assert_eq!(cursor.current(), &[1.0, 2.0, 3.0]);
}

#[test]
fn input_is_never_mutated() {
    let input = vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    let snapshot = input.clone();
    let mut engine = Engine::default();
    for algorithm in Algorithm::ALL {
        engine.run_algorithm(algorithm, &input).unwrap();
        assert_eq!(input, snapshot);
    }
}

#[test]
fn run_result_serializes_for_players() {
    let result = run("merge", &[2.0, 1.0]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["algorithm"], "merge");
    assert_eq!(json["sorted"], serde_json::json!([1.0, 2.0]));
    assert_eq!(json["actions"][0]["kind"], "MemoryAlloc");
    assert_eq!(json["stats"]["peak_memory"], 2);
}

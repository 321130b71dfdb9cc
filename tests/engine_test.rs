use std::collections::HashMap;

use anyhow::Result;

mod common;
use common::{run, seeded_reference_strings};

use lifosim::{Outcome, PageRef, SimulationHistory};

fn multiset<'a>(pages: impl Iterator<Item = &'a PageRef>) -> HashMap<PageRef, usize> {
    let mut counts = HashMap::new();
    for &page in pages {
        *counts.entry(page).or_insert(0) += 1;
    }
    counts
}

fn fault_steps(history: &SimulationHistory) -> Vec<usize> {
    history
        .iter()
        .filter(|step| step.is_fault())
        .map(|step| step.step_index)
        .collect()
}

#[test]
fn test_canonical_example_trace() -> Result<()> {
    let history = run(3, &[7, 0, 1, 2, 0, 3, 0, 4])?;

    assert_eq!(fault_steps(&history), vec![1, 2, 3, 4, 6, 8]);
    let hits: Vec<(usize, PageRef)> = history
        .iter()
        .filter(|step| step.is_hit())
        .map(|step| (step.step_index, step.requested_page))
        .collect();
    assert_eq!(hits, vec![(5, 0), (7, 0)]);

    let evicted: Vec<Option<PageRef>> = history.iter().map(|step| step.evicted_page).collect();
    assert_eq!(
        evicted,
        vec![None, None, None, Some(1), None, Some(2), None, Some(3)]
    );

    let last = history.last().expect("history has steps");
    assert_eq!(last.frames_after, vec![Some(7), Some(0), Some(4)]);
    assert_eq!(last.stack_after, vec![7, 0, 4]);

    Ok(())
}

#[test]
fn test_canonical_example_with_more_frames() -> Result<()> {
    let three = run(3, &[7, 0, 1, 2, 0, 3, 0, 4])?;
    let four = run(4, &[7, 0, 1, 2, 0, 3, 0, 4])?;

    assert_eq!(four.totals().faults, 6);
    assert_eq!(fault_steps(&four), vec![1, 2, 3, 4, 6, 8]);
    for index in 0..three.len() {
        let cursor = lifosim::Cursor::at(index);
        assert!(three.faults_up_to(cursor)? >= four.faults_up_to(cursor)?);
    }

    Ok(())
}

#[test]
fn test_single_frame_repeated_page() -> Result<()> {
    let history = run(1, &[5, 5, 5])?;
    let outcomes: Vec<Outcome> = history.iter().map(|step| step.outcome).collect();

    assert_eq!(outcomes, vec![Outcome::Fault, Outcome::Hit, Outcome::Hit]);
    assert_eq!(history.evictions().count(), 0);
    assert!(history.iter().all(|step| step.filled_slot_index == 0));

    Ok(())
}

#[test]
fn test_bottom_of_stack_stays_resident() -> Result<()> {
    let history = run(2, &[1, 2, 3, 2, 1])?;
    let steps = history.steps();

    assert_eq!(fault_steps(&history), vec![1, 2, 3, 4]);
    assert_eq!(steps[2].evicted_page, Some(2));
    assert_eq!(steps[3].evicted_page, Some(3));
    // Page 1 was loaded first and is never popped
    assert!(steps[4].is_hit());
    assert_eq!(steps[4].filled_slot_index, 0);

    Ok(())
}

#[test]
fn test_thrashing_above_pinned_bottom() -> Result<()> {
    let history = run(2, &[1, 2, 3, 2, 3, 2, 3])?;

    assert_eq!(history.totals().hits, 0);
    assert_eq!(history.totals().hit_ratio(), 0.0);
    assert!(history.iter().skip(2).all(|step| step.is_replacement()));

    Ok(())
}

#[test]
fn test_empty_reference_string() -> Result<()> {
    let history = run(3, &[])?;

    assert!(history.is_empty());
    assert_eq!(history.totals().hits, 0);
    assert_eq!(history.totals().faults, 0);
    assert_eq!(history.totals().hit_ratio(), 0.0);

    Ok(())
}

#[test]
fn test_simulation_is_deterministic() -> Result<()> {
    for refs in seeded_reference_strings(20, 1) {
        assert_eq!(run(3, &refs)?, run(3, &refs)?);
    }
    Ok(())
}

#[test]
fn test_occupancy_fills_then_holds() -> Result<()> {
    for refs in seeded_reference_strings(30, 2) {
        for frames in 1..=5 {
            let history = run(frames, &refs)?;
            let mut previous = 0;
            let mut filled = false;

            for step in &history {
                let occupied = step.occupied_count();
                assert!(occupied <= frames);
                assert!(occupied >= previous);
                if filled {
                    assert_eq!(occupied, frames);
                }
                filled |= occupied == frames;
                previous = occupied;
            }
        }
    }
    Ok(())
}

#[test]
fn test_stack_mirrors_frames() -> Result<()> {
    for refs in seeded_reference_strings(30, 3) {
        for frames in 1..=5 {
            let history = run(frames, &refs)?;
            for step in &history {
                assert_eq!(multiset(step.resident_pages()), multiset(step.stack_after.iter()));
                assert!(step.stack_after.len() <= frames);
            }
        }
    }
    Ok(())
}

#[test]
fn test_hit_fault_partition() -> Result<()> {
    for refs in seeded_reference_strings(30, 4) {
        let history = run(3, &refs)?;
        let mut previous_full = false;

        for step in &history {
            match step.outcome {
                Outcome::Hit => {
                    assert!(step.evicted_page.is_none());
                    assert_eq!(step.frames_after[step.filled_slot_index], Some(step.requested_page));
                }
                Outcome::Fault => {
                    // Eviction happens exactly when memory was already full
                    assert_eq!(step.evicted_page.is_some(), previous_full);
                    assert_eq!(step.evicted_slot_index.is_some(), previous_full);
                    assert_eq!(step.stack_top(), Some(&step.requested_page));
                }
            }
            assert_eq!(step.frames_after[step.filled_slot_index], Some(step.requested_page));
            previous_full = step.occupied_count() == 3;
        }
    }
    Ok(())
}

#[test]
fn test_no_belady_anomaly() -> Result<()> {
    for refs in seeded_reference_strings(40, 5) {
        for frames in 1..=6 {
            let smaller = run(frames, &refs)?;
            let larger = run(frames + 1, &refs)?;

            assert_eq!(lifosim::simulation::inclusion_violation(&smaller, &larger), None);
            for index in 0..smaller.len() {
                let cursor = lifosim::Cursor::at(index);
                assert!(smaller.faults_up_to(cursor)? >= larger.faults_up_to(cursor)?);
            }
        }
        assert!(lifosim::simulation::fault_curve(&refs, 1..=7).is_monotonic());
    }
    Ok(())
}

#[test]
fn test_snapshots_are_independent() -> Result<()> {
    let history = run(2, &[1, 2, 3, 4])?;
    let first = history.steps()[0].clone();

    // Later steps must not have altered earlier snapshots
    assert_eq!(first.frames_after, vec![Some(1), None]);
    assert_eq!(first.stack_after, vec![1]);
    assert_eq!(history.steps()[3].frames_after, vec![Some(1), Some(4)]);

    Ok(())
}

use std::fmt::Debug;

use log::{debug, trace};

use crate::input::SimulationInput;
use crate::simulation::frames::FrameSet;
use crate::simulation::history::{Outcome, SimulationHistory, StepRecord};
use crate::simulation::replacer::LifoReplacer;

/// Run the LIFO algorithm over a validated input and return the full history
pub fn simulate(input: &SimulationInput) -> SimulationHistory {
    simulate_pages(input.frame_count(), input.references())
}

/// Run the LIFO algorithm over any comparable page identifiers.
///
/// For every reference the resident pages age by one step, then:
/// - a resident page is a hit and changes nothing, not even its age;
/// - an absent page fills the lowest-index empty slot if there is one;
/// - otherwise the top of the replacement stack is evicted and its slot reused.
///
/// # Panics
///
/// Panics if `frame_count` is zero.
pub fn simulate_pages<P>(frame_count: usize, references: &[P]) -> SimulationHistory<P>
where
    P: Clone + PartialEq + Debug,
{
    assert!(frame_count > 0, "simulation requires at least one frame");
    debug!(
        "Simulating {} references across {} frames",
        references.len(),
        frame_count
    );

    let mut frames = FrameSet::new(frame_count);
    let mut replacer = LifoReplacer::new(frame_count);
    let mut steps = Vec::with_capacity(references.len());

    for (i, page) in references.iter().enumerate() {
        frames.age_occupied();

        let (outcome, filled, evicted) = match frames.find(page) {
            Some(slot) => (Outcome::Hit, slot, None),
            None => match frames.first_empty() {
                Some(slot) => {
                    frames.place(slot, page.clone());
                    replacer.record_load(page.clone());
                    (Outcome::Fault, slot, None)
                }
                None => {
                    let slot = evict_top(&mut frames, &mut replacer);
                    let victim = frames.place(slot, page.clone());
                    replacer.record_load(page.clone());
                    (Outcome::Fault, slot, victim.map(|victim| (victim, slot)))
                }
            },
        };

        trace!(
            "Step {}: page {:?} {:?} in slot {}, evicted {:?}",
            i + 1,
            page,
            outcome,
            filled,
            evicted.as_ref().map(|(victim, _)| victim)
        );

        let (evicted_page, evicted_slot_index) = match evicted {
            Some((victim, slot)) => (Some(victim), Some(slot)),
            None => (None, None),
        };

        steps.push(StepRecord {
            step_index: i + 1,
            requested_page: page.clone(),
            frames_after: frames.slots().to_vec(),
            frame_ages: frames.ages().to_vec(),
            stack_after: replacer.snapshot(),
            outcome,
            evicted_page,
            evicted_slot_index,
            filled_slot_index: filled,
        });
    }

    let history = SimulationHistory::from_steps(frame_count, steps);
    let totals = history.totals();
    debug!(
        "Simulation finished: {} hits, {} faults",
        totals.hits, totals.faults
    );
    history
}

/// Pop the stack top and return the slot it occupies. The stack always
/// mirrors the resident pages, so a miss here is a logic defect.
fn evict_top<P>(frames: &mut FrameSet<P>, replacer: &mut LifoReplacer<P>) -> usize
where
    P: Clone + PartialEq + Debug,
{
    let Some(top) = replacer.victim() else {
        panic!("replacement stack is empty while all {} frames are occupied", frames.len());
    };
    match frames.find(&top) {
        Some(slot) => slot,
        None => panic!("stack top {:?} is not resident in any frame", top),
    }
}

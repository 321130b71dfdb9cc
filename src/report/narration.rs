//! Human-readable descriptions of individual steps, for the action log and
//! for speech narration.

use std::fmt::Display;

use crate::simulation::history::StepRecord;

/// Action log line for a step. Frame numbers are 1-based.
pub fn describe<P: Display>(step: &StepRecord<P>) -> String {
    let mut message = format!("Page {} requested. ", step.requested_page);
    if step.is_hit() {
        message.push_str("HIT! Page already in memory.");
    } else {
        message.push_str("FAULT! ");
        match &step.evicted_page {
            Some(victim) => message.push_str(&format!(
                "Replaced page {} (top of stack) in Frame {}.",
                victim,
                step.filled_slot_index + 1
            )),
            None => message.push_str(&format!(
                "Loaded into empty Frame {}.",
                step.filled_slot_index + 1
            )),
        }
    }
    message
}

/// Stack line shown under each log entry, top first
pub fn stack_line<P: Display>(step: &StepRecord<P>) -> String {
    if step.stack_after.is_empty() {
        return "Stack: empty".to_string();
    }
    let items: Vec<String> = step.stack_after.iter().rev().map(|page| page.to_string()).collect();
    format!("Stack: [{}] (top → bottom)", items.join(" → "))
}

/// Sentence spoken by narration consumers
pub fn spoken<P: Display>(step: &StepRecord<P>) -> String {
    let page = &step.requested_page;
    if step.is_hit() {
        return format!("Page {} is already in memory. It is a Hit.", page);
    }
    match &step.evicted_page {
        Some(victim) => format!(
            "Page {} requested. Memory full. Replacing page {} at the top of the stack.",
            page, victim
        ),
        None => format!("Page {} requested. Fault. Loaded into an empty frame.", page),
    }
}

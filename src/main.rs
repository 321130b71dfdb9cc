use anyhow::Result;

use lifosim::input::{example_input, format_references};
use lifosim::report::narration::describe;
use lifosim::report::{format_ratio, render_table};
use lifosim::simulation::fault_curve;
use lifosim::simulate;

fn main() -> Result<()> {
    // Run the canonical classroom example
    let input = example_input();
    let history = simulate(&input);

    println!(
        "Reference string: {} ({} frames)",
        format_references(input.references()),
        input.frame_count()
    );
    println!();
    for step in &history {
        println!("{:>2}. {}", step.step_index, describe(step));
    }
    println!();
    print!("{}", render_table(&history));

    let totals = history.totals();
    println!(
        "Hits: {}  Faults: {}  Hit ratio: {}",
        totals.hits,
        totals.faults,
        format_ratio(totals)
    );

    // More frames never means more faults
    let curve = fault_curve(input.references(), 1..=input.frame_count() + 2);
    for point in curve.points() {
        println!("  {} frames -> {} faults", point.frame_count, point.tally.faults);
    }

    Ok(())
}

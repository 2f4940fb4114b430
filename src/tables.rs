use std::time::Duration;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use evsim::{
    core::{cycle::DrivingCycle, sample::Sample, state::TIME_STEP, summary::RunSummary},
    quantity::{power::Kilowatts, time::Seconds},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Number of ticks between the printed samples, at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stride(every: Duration) -> usize {
    (Seconds::from(every) / TIME_STEP).round().max(1.0) as usize
}

/// Tabulate every `every` of simulated time, plus the very last sample.
pub fn build_samples_table(samples: &[Sample], every: Duration) -> Table {
    let stride = stride(every);
    let mut table = new_table();
    table.set_header(vec!["Time", "Speed", "SoC", "Power", "Mode"]);
    for (index, sample) in samples.iter().enumerate() {
        if index % stride != 0 && index + 1 != samples.len() {
            continue;
        }
        let (mode, color) = if sample.power > Kilowatts::ZERO {
            ("draw", Color::Red)
        } else if sample.power < Kilowatts::ZERO {
            ("regen", Color::Green)
        } else {
            ("coast", Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(format!("{:.1}", Seconds(sample.time.0 * 60.0)))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{:.1}", sample.speed)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", sample.soc)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", sample.power))
                .set_alignment(CellAlignment::Right)
                .fg(color),
            Cell::new(mode).fg(color),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &RunSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Total distance",
        "Avg. efficiency",
        "Consumed",
        "Regenerated",
        "Final SoC",
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.1}", summary.total_distance)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.1}", summary.avg_efficiency)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", summary.energy_consumed))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Red),
        Cell::new(format!("{:.2}", summary.energy_regenerated))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
        Cell::new(format!("{:.1}", summary.final_soc)).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_cycles_table(cycles: &[DrivingCycle]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Duration", "Breakpoints", "Peak speed", "Mean speed"]);
    for cycle in cycles {
        table.add_row(vec![
            Cell::new(&cycle.name),
            Cell::new(format!("{:.0}", cycle.duration())).set_alignment(CellAlignment::Right),
            Cell::new(cycle.breakpoints.len()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", cycle.peak_speed())).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", cycle.mean_speed())).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

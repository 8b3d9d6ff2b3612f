// ===== shotscope/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use shotscope::session::{GroupKey, GroupReport};
use shotscope::shot::ShotRecord;

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// One row per group: who hit what, how many shots survived the model, and
/// the extremes the dispersion plot will be sized from.
pub fn print_session_overview(groups: &[GroupReport]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Club").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("Skipped"),
        Cell::new("Extrapolated"),
        Cell::new("Max Height").fg(Color::Cyan),
        Cell::new("Lateral Spread").fg(Color::Cyan),
    ]);
    right_align(&mut table, 2..=6);

    for g in groups {
        let extrapolated = g.shots.iter().filter(|s| s.apex_extrapolated).count();
        let skipped_cell = if g.skipped.is_empty() {
            Cell::new("0")
        } else {
            Cell::new(g.skipped.len()).fg(Color::Yellow)
        };
        let extrapolated_cell = if extrapolated == 0 {
            Cell::new("0")
        } else {
            Cell::new(extrapolated).fg(Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(&g.player).add_attribute(Attribute::Bold),
            Cell::new(&g.club),
            Cell::new(g.shots.len()),
            skipped_cell,
            extrapolated_cell,
            Cell::new(format!("{:.1}", g.bounds.max_apex_height_yds)),
            Cell::new(format!("±{:.1}", g.bounds.lateral_extent())),
        ]);
    }
    println!("\n{}", table);
}

/// The per-club summary table: Param / Count / Mean / Median / Max / Min /
/// 90th Pct, one row per requested metric. Columns the monitor never
/// reported render as dashes.
pub fn print_group_summary(group: &GroupReport) {
    println!("\n{} / {}", group.player, group.club);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Param").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Mean"),
        Cell::new("Median"),
        Cell::new("Max"),
        Cell::new("Min"),
        Cell::new("90th Pct").fg(Color::Cyan),
    ]);
    right_align(&mut table, 1..=6);

    for s in &group.stats {
        let prec = s.field.precision();
        let stat_cell = |value: f64| {
            if s.count == 0 {
                Cell::new("-")
            } else {
                Cell::new(format!("{:.*}", prec, value))
            }
        };

        table.add_row(vec![
            Cell::new(s.field.to_string()).add_attribute(Attribute::Bold),
            Cell::new(s.count),
            stat_cell(s.mean),
            stat_cell(s.median),
            stat_cell(s.max),
            stat_cell(s.min),
            stat_cell(s.p90).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

/// Group inventory for the audit run.
pub fn print_audit_table(groups: &[(GroupKey, Vec<ShotRecord>)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Club").add_attribute(Attribute::Bold),
        Cell::new("Shots"),
        Cell::new("Known Club"),
    ]);
    right_align(&mut table, 2..=2);

    for (key, rows) in groups {
        let known = if shotscope::shot::is_known_club(&key.club) {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("NO").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&key.player).add_attribute(Attribute::Bold),
            Cell::new(&key.club),
            Cell::new(rows.len()),
            known,
        ]);
    }
    println!("\n{}", table);
}

/// Shots the trajectory model rejected, with the group-relative row index.
pub fn print_issue_table(issues: &[(String, String, usize, String)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Club").add_attribute(Attribute::Bold),
        Cell::new("Shot #"),
        Cell::new("Problem").fg(Color::Red),
    ]);
    right_align(&mut table, 2..=2);

    for (player, club, row, reason) in issues {
        table.add_row(vec![
            Cell::new(player),
            Cell::new(club),
            Cell::new(row),
            Cell::new(reason).fg(Color::Red),
        ]);
    }
    println!("\n{}", table);
}

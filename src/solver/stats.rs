use prettytable::{Cell as TableCell, Row as TableRow, Table};

/// Counters accumulated over one solve call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes entered (one per SELECT step).
    pub nodes_visited: u64,
    /// Tried values that were undone after their branch failed.
    pub backtracks: u64,
    /// Forward-checking passes run.
    pub propagations: u64,
    /// Propagation passes that emptied some domain.
    pub wipeouts: u64,
    /// Fully-assigned cages rejected by the exact-sum gate.
    pub cage_sum_rejections: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![
        TableCell::new("Metric"),
        TableCell::new("Count"),
    ]));

    let rows = [
        ("Nodes visited", stats.nodes_visited),
        ("Backtracks", stats.backtracks),
        ("Propagations", stats.propagations),
        ("Domain wipe-outs", stats.wipeouts),
        ("Cage sum rejections", stats.cage_sum_rejections),
    ];
    for (name, count) in rows {
        table.add_row(TableRow::new(vec![
            TableCell::new(name),
            TableCell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

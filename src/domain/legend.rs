use crate::domain::entities::dataset::{Group, LegendEntry};

pub const LEGEND_MAX_PER_ROW: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum LegendCell {
    Entry {
        category: String,
        color: &'static str,
    },
    Placeholder,
}

impl LegendCell {
    #[allow(dead_code)]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, LegendCell::Placeholder)
    }
}

pub type LegendRow = Vec<LegendCell>;

pub fn legend_entries(groups: &[Group], colors: &[&'static str]) -> Vec<LegendEntry> {
    groups
        .iter()
        .zip(colors.iter().copied())
        .map(|(group, color)| LegendEntry {
            category: group.category.clone(),
            total: group.total,
            color,
        })
        .collect()
}

/// Splits entries into rows of exactly `max_per_row` cells, padding the last
/// row with placeholders. Entry order is kept as given.
pub fn layout_legend(entries: &[LegendEntry], max_per_row: usize) -> Vec<LegendRow> {
    let max_per_row = max_per_row.max(1);
    entries
        .chunks(max_per_row)
        .map(|chunk| {
            let mut row: LegendRow = chunk
                .iter()
                .map(|entry| LegendCell::Entry {
                    category: entry.category.clone(),
                    color: entry.color,
                })
                .collect();
            row.resize(max_per_row, LegendCell::Placeholder);
            row
        })
        .collect()
}

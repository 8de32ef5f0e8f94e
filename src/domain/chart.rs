use crate::domain::aggregate::aggregate;
use crate::domain::entities::dataset::{Dataset, GroupingField, LegendEntry};
use crate::domain::legend::{layout_legend, legend_entries, LegendRow, LEGEND_MAX_PER_ROW};
use crate::domain::palette::assign_colors;
use crate::domain::ring::{layout_ring, RingLayout};

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub field: GroupingField,
    pub ring: RingLayout,
    pub entries: Vec<LegendEntry>,
    pub legend: Vec<LegendRow>,
}

/// Runs the whole pipeline for one grouping. `None` means nothing to display.
pub fn build_chart(dataset: &Dataset, field: GroupingField) -> Option<ChartView> {
    let groups = aggregate(dataset, field);
    let colors = assign_colors(&groups);
    let ring = layout_ring(&groups, &colors)?;
    let entries = legend_entries(&groups, &colors);
    let legend = layout_legend(&entries, LEGEND_MAX_PER_ROW);

    Some(ChartView {
        field,
        ring,
        entries,
        legend,
    })
}

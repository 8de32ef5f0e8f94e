use crate::domain::chart::{build_chart, ChartView};
use crate::domain::entities::dataset::{Dataset, GroupingField};
use crate::domain::format::format_brl;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingView {
    pub field: GroupingField,
    /// `None` when the grouping has no positive totals.
    pub chart: Option<ChartView>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioReport {
    pub total: f64,
    pub total_label: String,
    pub views: Vec<GroupingView>,
}

impl PortfolioReport {
    pub fn view(&self, field: GroupingField) -> Option<&GroupingView> {
        self.views.iter().find(|view| view.field == field)
    }
}

/// Recomputes every grouping of `dataset`; nothing is cached between renders.
pub fn build_report(dataset: &Dataset) -> PortfolioReport {
    let total = dataset.total();
    let views = GroupingField::ALL
        .into_iter()
        .map(|field| GroupingView {
            field,
            chart: build_chart(dataset, field),
        })
        .collect();

    PortfolioReport {
        total,
        total_label: format_brl(total),
        views,
    }
}

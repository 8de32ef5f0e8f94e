//! Geometry of the donut chart.
//!
//! Angles are in degrees, measured counter-clockwise from the positive x-axis,
//! with y pointing up. Wedges start at 12 o'clock and advance clockwise, so
//! each wedge ends at a smaller angle than it starts.

use crate::domain::entities::dataset::Group;
use crate::domain::format::{format_brl, format_brl_whole, format_percent_whole};

pub const START_ANGLE: f64 = 90.0;
pub const OUTER_RADIUS: f64 = 1.0;
pub const RING_THICKNESS: f64 = 0.4;
pub const LABEL_RADIUS: f64 = OUTER_RADIUS - RING_THICKNESS / 2.0;
/// Minimum share of the total, in percent, for a wedge to carry a label.
pub const LABEL_THRESHOLD_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WedgeLabel {
    pub amount: String,
    pub percent: String,
    pub position: Point,
}

impl WedgeLabel {
    #[allow(dead_code)]
    pub fn text(&self) -> String {
        format!("{}\n{}", self.amount, self.percent)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: String,
    pub value: f64,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the total in percent.
    pub share: f64,
    pub label: Option<WedgeLabel>,
}

impl Wedge {
    #[allow(dead_code)]
    pub fn span(&self) -> f64 {
        self.start_angle - self.end_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    pub wedges: Vec<Wedge>,
    pub total: f64,
    pub center_label: String,
    pub outer_radius: f64,
    pub thickness: f64,
}

impl RingLayout {
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.thickness
    }
}

pub fn wedge_span(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value / total * 360.0
}

/// Returns `(start, end)` of a wedge that begins after `prior_cumulative`
/// degrees have already been allocated clockwise from `start_angle`.
pub fn wedge_angles(value: f64, total: f64, start_angle: f64, prior_cumulative: f64) -> (f64, f64) {
    let start = start_angle - prior_cumulative;
    (start, start - wedge_span(value, total))
}

pub fn polar_to_cartesian(angle_deg: f64, radius: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point {
        x: radius * rad.cos(),
        y: radius * rad.sin(),
    }
}

pub fn share_percent(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value * 100.0 / total
}

pub fn is_labeled(share: f64) -> bool {
    share >= LABEL_THRESHOLD_PERCENT
}

/// Lays out the ring for groups already sorted by the aggregator.
///
/// Returns `None` when there is nothing to draw.
pub fn layout_ring(groups: &[Group], colors: &[&'static str]) -> Option<RingLayout> {
    let total: f64 = groups.iter().map(|group| group.total).sum();
    if groups.is_empty() || total <= 0.0 {
        return None;
    }

    let mut cumulative = 0.0;
    let mut wedges = Vec::with_capacity(groups.len());
    for (group, color) in groups.iter().zip(colors.iter().copied()) {
        let (start_angle, end_angle) = wedge_angles(group.total, total, START_ANGLE, cumulative);
        cumulative += wedge_span(group.total, total);

        let share = share_percent(group.total, total);
        let mut wedge = Wedge {
            category: group.category.clone(),
            value: group.total,
            color,
            start_angle,
            end_angle,
            share,
            label: None,
        };
        if is_labeled(share) {
            wedge.label = Some(WedgeLabel {
                amount: format_brl_whole(group.total),
                percent: format_percent_whole(share),
                position: polar_to_cartesian(wedge.mid_angle(), LABEL_RADIUS),
            });
        }
        wedges.push(wedge);
    }

    Some(RingLayout {
        wedges,
        total,
        center_label: format_brl(total),
        outer_radius: OUTER_RADIUS,
        thickness: RING_THICKNESS,
    })
}

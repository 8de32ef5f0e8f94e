pub mod legend;
pub mod notice;
pub mod ring_chart;

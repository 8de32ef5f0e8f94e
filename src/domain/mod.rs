pub mod aggregate;
pub mod chart;
pub mod entities;
pub mod format;
pub mod legend;
pub mod palette;
pub mod ring;

pub const PALETTE: [&str; 7] = [
    "#4A90E2", "#F5A623", "#D0021B", "#50E3C2", "#B8E986", "#9013FE", "#FF3366",
];

/// Color for the `idx`-th sorted group; wraps around the palette.
pub fn color_at(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

pub fn assign_colors<T>(groups: &[T]) -> Vec<&'static str> {
    (0..groups.len()).map(color_at).collect()
}

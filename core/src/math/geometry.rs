use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in board millimetres: origin `(x, y)`, length along
/// x and width along y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub l: f64,
    pub w: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, l: f64, w: f64) -> Self {
        Self { x, y, l, w }
    }

    /// Separating-axis test. Shared edges do not count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x + self.l <= other.x
            || other.x + other.l <= self.x
            || self.y + self.w <= other.y
            || other.y + other.w <= self.y)
    }
}

/// Every overlapping pair `(i, j)` with `i < j`, in input index order.
pub fn find_overlaps<'a, I>(rects: I) -> Vec<(usize, usize)>
where
    I: IntoIterator<Item = &'a Rect>,
{
    let rects: Vec<&Rect> = rects.into_iter().collect();
    let mut pairs = Vec::new();
    for (i, first) in rects.iter().enumerate() {
        for (j, second) in rects.iter().enumerate().skip(i + 1) {
            if first.overlaps(second) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

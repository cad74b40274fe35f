use crate::math::StatsHelper;
use crate::prelude::{SimError, SimResult};
use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize, Serializer};

/// Weight of the top surface in the averaged field.
pub const AVG_TOP_WEIGHT: f64 = 0.6;
/// Weight of the bottom surface in the averaged field.
pub const AVG_BOTTOM_WEIGHT: f64 = 0.4;

/// Upper bound on `nx * ny` for one surface field.
pub const MAX_CELLS: usize = 16_000_000;

/// Temperature samples in °C, shape `(ny, nx)`, indexed `[[y, x]]`.
pub type Field = Array2<f64>;

/// Spatial resolution and cell spacing (mm) of the surface fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dy: f64,
}

impl Grid {
    pub fn new(nx: usize, ny: usize, dx: f64, dy: f64) -> SimResult<Self> {
        let grid = Self { nx, ny, dx, dy };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.nx == 0 || self.ny == 0 {
            return Err(SimError::invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.nx, self.ny
            )));
        }
        match self.nx.checked_mul(self.ny) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(SimError::invalid(format!(
                    "grid {}x{} exceeds the {} cell limit",
                    self.nx, self.ny, MAX_CELLS
                )))
            }
        }
        if !(self.dx.is_finite() && self.dx > 0.0 && self.dy.is_finite() && self.dy > 0.0) {
            return Err(SimError::invalid(format!(
                "grid spacing must be positive, got dx={} dy={}",
                self.dx, self.dy
            )));
        }
        Ok(())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.ny, self.nx)
    }

    /// Board x coordinate (mm) of column `i`.
    pub fn x(&self, i: usize) -> f64 {
        i as f64 * self.dx
    }

    /// Board y coordinate (mm) of row `j`.
    pub fn y(&self, j: usize) -> f64 {
        j as f64 * self.dy
    }
}

/// The top, bottom and weighted-average surface fields of one run.
///
/// `avg` is always derived from `top` and `bottom`; it cannot be supplied.
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceFields {
    #[serde(serialize_with = "serialize_rows")]
    top: Field,
    #[serde(serialize_with = "serialize_rows")]
    bottom: Field,
    #[serde(serialize_with = "serialize_rows")]
    avg: Field,
}

impl SurfaceFields {
    pub fn from_surfaces(top: Field, bottom: Field) -> SimResult<Self> {
        if top.dim() != bottom.dim() {
            return Err(SimError::invalid(format!(
                "surface shapes differ: top {:?}, bottom {:?}",
                top.dim(),
                bottom.dim()
            )));
        }
        let avg = Zip::from(&top)
            .and(&bottom)
            .map_collect(|&t, &b| AVG_TOP_WEIGHT * t + AVG_BOTTOM_WEIGHT * b);
        Ok(Self { top, bottom, avg })
    }

    pub fn top(&self) -> &Field {
        &self.top
    }

    pub fn bottom(&self) -> &Field {
        &self.bottom
    }

    pub fn avg(&self) -> &Field {
        &self.avg
    }

    /// Shared `(min, max)` over all three surfaces, for a common colour scale.
    pub fn range(&self) -> (f64, f64) {
        let all = self.top.iter().chain(self.bottom.iter()).chain(self.avg.iter());
        StatsHelper::min_max(all).unwrap_or((0.0, 0.0))
    }
}

/// Renderers expect nested `[y][x]` rows rather than ndarray's own layout.
fn serialize_rows<S: Serializer>(field: &Field, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(field.rows().into_iter().map(|row| row.to_vec()))
}

use crate::{
    hex::{Cell, Lattice},
    pixel::{Point, Projection},
    timed, GridConfig,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A fully generated grid. Contains the lattice of cells as well as the
/// configuration that was used to generate it, which also defines how the
/// grid maps onto pixel space.
///
/// ## Serialization
/// Grids can be serialized to and from JSON (with the `json` feature). The
/// format mirrors the struct: a `config` object and a `cells` array, where
/// each cell is an object with `x` and `y` fields. `z` is never serialized
/// since it's always `-x-y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// The config used to generate this grid. Generation is deterministic
    /// based on the config, and once the grid has been generated, the config
    /// can never change.
    config: GridConfig,

    /// The cells that make up this grid
    cells: Lattice,
}

impl Grid {
    /// Generate a new grid with the given config. Returns an error if the
    /// config is invalid.
    pub fn generate(config: GridConfig) -> anyhow::Result<Self> {
        info!("Generating grid with config {:#?}", config);

        config.validate().context("invalid config")?;

        let cells = timed!(
            "Grid generation",
            log::Level::Info,
            config.shape.generate()
        );

        Ok(Self { config, cells })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get a reference to the cells that make up this grid
    pub fn cells(&self) -> &Lattice {
        &self.cells
    }

    /// Get the owned lattice for this grid
    pub fn into_cells(self) -> Lattice {
        self.cells
    }

    /// Get the number of cells in the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the pixel projection defined by this grid's config
    pub fn projection(&self) -> Projection {
        // Config was validated during construction
        Projection::new_unchecked(self.config.projection)
    }

    /// Get the pixel position of a cell's center. The cell doesn't have to be
    /// a member of the grid.
    pub fn center(&self, cell: Cell) -> Point {
        self.projection().cell_to_point(cell)
    }

    /// Get the pixel positions of a cell's six corners. The cell doesn't have
    /// to be a member of the grid.
    pub fn corners(&self, cell: Cell) -> [Point; 6] {
        self.projection().corners(cell)
    }

    /// Find the cell of this grid that contains a pixel position. Returns
    /// `None` if the point falls outside the grid.
    pub fn pick(&self, point: Point) -> Option<Cell> {
        let cell = self.projection().point_to_cell(point);
        if self.cells.contains(cell) {
            Some(cell)
        } else {
            None
        }
    }

    /// Deserialize a grid from JSON. A grid can be serialized into JSON with
    /// [Grid::to_json]. Will fail if the input is malformed, or if the
    /// embedded config is invalid.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let grid: Self =
            serde_json::from_str(json).context("error deserializing grid")?;
        grid.config.validate().context("invalid config")?;
        Ok(grid)
    }

    /// Serializes this grid into JSON. This is a recoverable format, which can
    /// be loaded back into a [Grid] with [Grid::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing grid")
    }
}

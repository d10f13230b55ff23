use hexlattice::{
    layout, Cell, Grid, GridConfig, HexError, Lattice, Orientation, Point,
    ProjectionConfig, Shape, ShapeDirection, Side,
};

/// Sanity check, make sure the default config generates the grid we expect
#[test]
fn test_grid_default() {
    let config = GridConfig::default();
    let grid = Grid::generate(config).unwrap();
    assert_eq!(grid.len(), 331, "Default config failed: {:?}", config);
    assert!(grid.cells().contains(Cell::ORIGIN));
}

#[test]
fn test_shape_sizes() {
    for direction in [
        ShapeDirection::Standard,
        ShapeDirection::Flipped,
        ShapeDirection::Vertical,
    ] {
        let shapes = [
            (Shape::Hexagonal { radius: 2 }, 19),
            (
                Shape::Rectangular {
                    width: 4,
                    height: 5,
                },
                20,
            ),
            (
                Shape::Parallelogram {
                    width: 4,
                    height: 2,
                    direction,
                },
                15,
            ),
            (
                Shape::Triangular { base: 3, direction },
                // Triangles have no vertical variant
                if direction == ShapeDirection::Vertical {
                    0
                } else {
                    10
                },
            ),
        ];
        for (shape, len) in shapes {
            let grid = Grid::generate(GridConfig {
                shape,
                ..Default::default()
            })
            .unwrap();
            assert_eq!(grid.len(), len, "wrong size for {:?}", shape);
        }
    }
}

/// Every cell produced by any generator sits on the plane and rebuilding it
/// from its components succeeds
#[test]
fn test_generated_cells_on_plane() {
    let lattices = [
        layout::hexagonal(5),
        layout::rectangular(6, 7),
        layout::parallelogram(5, 8, ShapeDirection::Vertical),
        layout::triangular(6, ShapeDirection::Flipped),
    ];
    for lattice in &lattices {
        for cell in lattice.iter() {
            assert_eq!(cell.x() + cell.y() + cell.z(), 0);
            assert_eq!(Cell::new(cell.x(), cell.y(), cell.z()), Ok(cell));
        }
    }
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        Cell::new(1, 1, 1),
        Err(HexError::InvalidCell { x: 1, y: 1, z: 1 })
    );
    assert_eq!(
        Lattice::neighbor(Cell::ORIGIN, 7),
        Err(HexError::SideOutOfRange(7))
    );
    assert_eq!(
        Cell::new(1, 1, 1).unwrap_err().to_string(),
        "invalid cell (1, 1, 1); must be on the plane x+y+z=0 within i32 range"
    );
}

#[test]
fn test_neighbors_are_adjacent() {
    let cell = Cell::new(4, -7, 3).unwrap();
    for side in Side::ALL {
        let neighbor = cell.neighbor(side);
        assert_eq!(cell.distance(neighbor), 1);
        assert_eq!(neighbor.neighbor(side.opposite()), cell);
    }
}

#[test]
fn test_pixel_round_trip() {
    for orientation in [Orientation::Flat, Orientation::Pointy] {
        let grid = Grid::generate(GridConfig {
            shape: Shape::Hexagonal { radius: 6 },
            projection: ProjectionConfig {
                orientation,
                radius: 12.5,
                origin: Point::new(320.0, 240.0),
            },
        })
        .unwrap();
        for cell in grid.cells().iter() {
            assert_eq!(grid.pick(grid.center(cell)), Some(cell));
            // Points slightly inside each corner still belong to the cell
            let center = grid.center(cell);
            for corner in grid.corners(cell) {
                let point = center + (corner - center) * 0.9;
                assert_eq!(grid.pick(point), Some(cell));
            }
        }
        // Far outside the grid
        assert_eq!(grid.pick(Point::new(-1000.0, -1000.0)), None);
    }
}

#[test]
fn test_lattice_set_ops() {
    let mut lattice = layout::hexagonal(2);
    let inner = layout::hexagonal(1);
    lattice -= &inner;
    // Just the outer ring is left
    assert_eq!(lattice.len(), 12);
    for cell in lattice.iter() {
        assert_eq!(cell.distance(Cell::ORIGIN), 2);
    }
    lattice += inner;
    assert_eq!(lattice, layout::hexagonal(2));
}

#[cfg(feature = "json")]
#[test]
fn test_json_round_trip() {
    let grid = Grid::generate(GridConfig {
        shape: Shape::Triangular {
            base: 4,
            direction: ShapeDirection::Flipped,
        },
        ..Default::default()
    })
    .unwrap();
    let json = grid.to_json();
    assert_eq!(Grid::from_json(&json).unwrap(), grid);

    // Invalid config gets rejected on the way in
    let bad = json.replace("\"radius\":1.0", "\"radius\":0.0");
    assert_ne!(bad, json);
    assert!(Grid::from_json(&bad).is_err());
}

use paper_rally_core::{CellCoord, Velocity};
use paper_rally_system_path::PathRasterizer;

fn velocities() -> impl Iterator<Item = Velocity> {
    (-6..=6).flat_map(|x| (-6..=6).map(move |y| Velocity::new(x, y)))
}

#[test]
fn path_length_equals_fast_axis_magnitude() {
    let rasterizer = PathRasterizer::new();
    let origin = CellCoord::new(3, -2);
    for velocity in velocities() {
        let path = rasterizer.rasterize(origin, velocity);
        let expected = velocity.x().abs().max(velocity.y().abs()) as usize;
        assert_eq!(path.len(), expected, "velocity {velocity:?}");
    }
}

#[test]
fn path_ends_on_the_coasting_cell() {
    let rasterizer = PathRasterizer::new();
    let origin = CellCoord::new(10, 10);
    for velocity in velocities().filter(|velocity| !velocity.is_zero()) {
        let path = rasterizer.rasterize(origin, velocity);
        assert_eq!(path.last(), Some(&(origin + velocity)), "velocity {velocity:?}");
    }
}

#[test]
fn consecutive_cells_are_adjacent() {
    let rasterizer = PathRasterizer::new();
    let origin = CellCoord::new(0, 0);
    for velocity in velocities() {
        let mut previous = origin;
        for cell in rasterizer.rasterize(origin, velocity) {
            assert_eq!(previous.chebyshev_distance(cell), 1, "velocity {velocity:?}");
            previous = cell;
        }
    }
}

#[test]
fn rasterization_is_deterministic() {
    let rasterizer = PathRasterizer::new();
    for velocity in velocities() {
        let first = rasterizer.rasterize(CellCoord::new(1, 1), velocity);
        let second = rasterizer.rasterize(CellCoord::new(1, 1), velocity);
        assert_eq!(first, second);
    }
}

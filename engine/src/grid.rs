use crate::log;
use crate::rng::GameRng;
use crate::snake::Snake;
use crate::types::{CellKind, FieldSize, Layout, Point};

// Row-major cell buffer. Wall and fruit counts are tracked so random
// placement can refuse a saturated grid instead of sampling forever.
#[derive(Clone, Debug)]
pub struct Grid {
    size: FieldSize,
    cells: Vec<CellKind>,
    wall_count: usize,
    fruit_count: usize,
}

impl Grid {
    pub fn new(size: FieldSize) -> Self {
        Self {
            size,
            cells: vec![CellKind::Empty; size.cell_count()],
            wall_count: 0,
            fruit_count: 0,
        }
    }

    pub fn size(&self) -> FieldSize {
        self.size
    }

    // `point` must already be wrapped into the field.
    pub fn kind_at(&self, point: Point) -> CellKind {
        self.cells[self.index(point)]
    }

    pub fn set(&mut self, point: Point, kind: CellKind) {
        let index = self.index(point);
        let old = self.cells[index];
        if old == kind {
            return;
        }
        match old {
            CellKind::Wall => self.wall_count -= 1,
            CellKind::Fruit => self.fruit_count -= 1,
            CellKind::Empty => {}
        }
        match kind {
            CellKind::Wall => self.wall_count += 1,
            CellKind::Fruit => self.fruit_count += 1,
            CellKind::Empty => {}
        }
        self.cells[index] = kind;
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellKind::Empty);
        self.wall_count = 0;
        self.fruit_count = 0;
    }

    pub fn wall_count(&self) -> usize {
        self.wall_count
    }

    pub fn fruit_count(&self) -> usize {
        self.fruit_count
    }

    pub fn apply_layout(&mut self, layout: Layout) {
        let width = self.size.width;
        let height = self.size.height;
        match layout {
            Layout::Open => {}
            Layout::Bordered => {
                for x in 0..width {
                    self.set(Point::new(x as i32, 0), CellKind::Wall);
                    self.set(Point::new(x as i32, (height - 1) as i32), CellKind::Wall);
                }
                for y in 0..height {
                    self.set(Point::new(0, y as i32), CellKind::Wall);
                    self.set(Point::new((width - 1) as i32, y as i32), CellKind::Wall);
                }
            }
            Layout::BorderedWithGaps => {
                for x in 0..width {
                    if !is_doorway(x, width) {
                        self.set(Point::new(x as i32, 0), CellKind::Wall);
                        self.set(Point::new(x as i32, (height - 1) as i32), CellKind::Wall);
                    }
                }
                for y in 0..height {
                    if !is_doorway(y, height) {
                        self.set(Point::new(0, y as i32), CellKind::Wall);
                        self.set(Point::new((width - 1) as i32, y as i32), CellKind::Wall);
                    }
                }
            }
        }
    }

    // Sets a uniformly random eligible cell to `kind` (Wall or Fruit):
    // not under the snake, not holding the other kind. None when no
    // eligible cell remains, so the sampling loop always terminates.
    pub fn place_random(
        &mut self,
        kind: CellKind,
        snake: &Snake,
        rng: &mut GameRng,
    ) -> Option<Point> {
        let blocking = match kind {
            CellKind::Fruit => CellKind::Wall,
            CellKind::Wall => CellKind::Fruit,
            CellKind::Empty => return None,
        };
        let blocking_count = match blocking {
            CellKind::Wall => self.wall_count,
            _ => self.fruit_count,
        };

        // Snake segments always sit on Empty cells, so they never
        // overlap the blocking kind and the subtraction is exact.
        let eligible = self
            .size
            .cell_count()
            .saturating_sub(blocking_count + snake.segments().len());
        if eligible == 0 {
            log!("no eligible cell left for {:?} placement", kind);
            return None;
        }

        loop {
            let point = rng.random_cell(self.size);
            if snake.occupies(point) || self.kind_at(point) == blocking {
                continue;
            }
            self.set(point, kind);
            return Some(point);
        }
    }

    fn index(&self, point: Point) -> usize {
        point.y as usize * self.size.width + point.x as usize
    }
}

// Passable edge positions lie strictly between one third and two thirds
// of the edge length.
fn is_doorway(pos: usize, n: usize) -> bool {
    pos > n / 3 && pos < (2 * n).div_ceil(3)
}

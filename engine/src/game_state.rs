use crate::grid::Grid;
use crate::log;
use crate::rng::GameRng;
use crate::snake::Snake;
use crate::types::{CellKind, Collision, Direction, FieldSize, Layout, Point};

// One Grid/Snake pair plus the active layout. Collisions are ordinary
// result values the caller treats as game over; recovery is `reset`.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    layout: Layout,
}

impl GameState {
    pub fn new(size: FieldSize, layout: Layout) -> Self {
        let mut state = Self {
            grid: Grid::new(size),
            snake: Snake::new(size.center(), Direction::Left),
            layout,
        };
        state.reset();
        state
    }

    pub fn reset(&mut self) {
        self.grid.clear();
        self.grid.apply_layout(self.layout);
        self.snake = Snake::new(self.grid.size().center(), Direction::Left);
        log!("field reset, layout {:?}", self.layout);
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    // Rejects a heading that would step straight back onto the second
    // segment; a single-segment snake turns freely. Rejection keeps the
    // prior heading.
    pub fn try_set_heading(&mut self, candidate: Direction) -> bool {
        if let Some(second) = self.snake.second() {
            let target = (self.snake.head() + candidate.unit()).wrap(self.grid.size());
            if target == second {
                return false;
            }
        }
        self.snake.set_heading(candidate);
        true
    }

    // The wrap is unconditional; bordered layouts merely make it
    // unreachable. On success the whole body shifts, the grid is
    // untouched.
    pub fn advance(&mut self) -> Result<(), Collision> {
        let new_head = (self.snake.head() + self.snake.heading().unit()).wrap(self.grid.size());

        if self.snake.occupies(new_head) {
            return Err(Collision::Body);
        }
        if self.grid.kind_at(new_head) == CellKind::Wall {
            return Err(Collision::Wall);
        }

        self.snake.shift_to(new_head);
        Ok(())
    }

    // Runs after `advance`: reads the post-move head position.
    pub fn resolve_fruit(&mut self) -> bool {
        let head = self.snake.head();
        if self.grid.kind_at(head) != CellKind::Fruit {
            return false;
        }
        self.grid.set(head, CellKind::Empty);
        self.snake.grow_tail(self.grid.size());
        log!(
            "ate fruit at ({}, {}), length {}",
            head.x,
            head.y,
            self.snake.segments().len()
        );
        true
    }

    pub fn place_fruit(&mut self, rng: &mut GameRng) -> Option<Point> {
        let placed = self.grid.place_random(CellKind::Fruit, &self.snake, rng);
        if let Some(point) = placed {
            log!("fruit spawned at ({}, {})", point.x, point.y);
        }
        placed
    }

    pub fn place_wall(&mut self, rng: &mut GameRng) -> Option<Point> {
        let placed = self.grid.place_random(CellKind::Wall, &self.snake, rng);
        if let Some(point) = placed {
            log!("wall spawned at ({}, {})", point.x, point.y);
        }
        placed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}

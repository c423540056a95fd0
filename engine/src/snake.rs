use crate::types::{Direction, FieldSize, Point};

// Ordered segments, head at index 0. The heading lives apart from the
// body so orientation is meaningful even at length 1.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Point>,
    heading: Direction,
}

impl Snake {
    pub fn new(start: Point, heading: Direction) -> Self {
        Self {
            body: vec![start],
            heading,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.first().expect("snake body is never empty")
    }

    pub fn second(&self) -> Option<Point> {
        self.body.get(1).copied()
    }

    pub fn segments(&self) -> &[Point] {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    // Each segment takes the position vacated by the one in front of
    // it; written tail-first so nothing is overwritten early.
    pub(crate) fn shift_to(&mut self, new_head: Point) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = new_head;
    }

    // A single-segment snake grows one cell behind the head, opposite
    // the heading; a longer one continues its last-two-segments vector.
    pub(crate) fn grow_tail(&mut self, size: FieldSize) {
        let new_tail = if let [.., second_last, last] = self.body.as_slice() {
            *last + (*last - *second_last)
        } else {
            self.head() - self.heading.unit()
        };
        self.body.push(new_tail.wrap(size));
    }
}

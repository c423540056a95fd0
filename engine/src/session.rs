use std::time::{Duration, Instant};

use crate::game_state::GameState;
use crate::log;
use crate::rng::GameRng;
use crate::settings::GameSettings;
use crate::timer::DifficultyTimer;
use crate::types::{CellKind, Collision, Direction, FieldSize, Layout, Point};

// Input sampled once per frame by the host: at most one directional
// intent, plus the hold-to-go-fast boost flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub direction: Option<Direction>,
    pub boost: bool,
}

impl FrameInput {
    pub fn direction(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Self::default()
        }
    }
}

// Current computed intervals, for informational display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerIntervals {
    pub movement: Duration,
    pub fruit_spawn: Duration,
    pub wall_spawn: Duration,
}

// The engine plus its cadence timers and pause/game-over flags. The
// host calls `frame` once per render tick; everything is synchronous.
pub struct GameSession {
    state: GameState,
    rng: GameRng,
    movement_timer: DifficultyTimer,
    fruit_timer: DifficultyTimer,
    wall_timer: DifficultyTimer,
    wall_gate: usize,
    paused: bool,
    game_over: Option<Collision>,
    started_at: Instant,
    last_active: Instant,
}

impl GameSession {
    pub fn new(settings: &GameSettings, seed: u64, now: Instant) -> Self {
        Self {
            state: GameState::new(settings.field_size(), settings.layout),
            rng: GameRng::new(seed),
            movement_timer: DifficultyTimer::new(settings.movement_curve, now),
            fruit_timer: DifficultyTimer::new(settings.fruit_curve, now),
            wall_timer: DifficultyTimer::new(settings.wall_curve, now),
            wall_gate: settings.wall_gate,
            paused: false,
            game_over: None,
            started_at: now,
            last_active: now,
        }
    }

    // A collision latches game over until `reset`.
    pub fn frame(&mut self, input: FrameInput, now: Instant) {
        if self.paused || self.game_over.is_some() {
            return;
        }
        self.last_active = now;

        let length = self.state.snake().segments().len();
        let movement_length = if input.boost {
            // Top speed: poll the movement timer as if fully saturated.
            self.movement_timer.curve().threshold
        } else {
            length
        };

        if self.movement_timer.poll(movement_length, now) {
            if let Some(direction) = input.direction {
                self.state.try_set_heading(direction);
            }
            match self.state.advance() {
                Ok(()) => {
                    self.state.resolve_fruit();
                }
                Err(collision) => {
                    self.game_over = Some(collision);
                    log!("game over: {:?} collision", collision);
                }
            }
        }

        let length = self.state.snake().segments().len();
        if self.fruit_timer.poll(length, now) {
            self.state.place_fruit(&mut self.rng);
        }
        if length > self.wall_gate && self.wall_timer.poll(length, now) {
            self.state.place_wall(&mut self.rng);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    // Timer phases are left alone; the first post-reset poll re-arms
    // them.
    pub fn reset(&mut self, now: Instant) {
        self.state.reset();
        self.game_over = None;
        self.paused = false;
        self.started_at = now;
        self.last_active = now;
    }

    pub fn set_layout(&mut self, layout: Layout, now: Instant) {
        self.state.set_layout(layout);
        self.reset(now);
    }

    pub fn field_size(&self) -> FieldSize {
        self.state.grid().size()
    }

    pub fn cell_at(&self, point: Point) -> CellKind {
        self.state.grid().kind_at(point)
    }

    pub fn segments(&self) -> &[Point] {
        self.state.snake().segments()
    }

    pub fn heading(&self) -> Direction {
        self.state.snake().heading()
    }

    pub fn layout(&self) -> Layout {
        self.state.layout()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> Option<Collision> {
        self.game_over
    }

    pub fn score(&self) -> usize {
        self.segments().len() - 1
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // Frozen while paused or after a collision.
    pub fn elapsed(&self) -> Duration {
        self.last_active.duration_since(self.started_at)
    }

    pub fn intervals(&self) -> TimerIntervals {
        let length = self.segments().len();
        TimerIntervals {
            movement: self.movement_timer.interval(length),
            fruit_spawn: self.fruit_timer.interval(length),
            wall_spawn: self.wall_timer.interval(length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::DifficultyCurve;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn test_settings() -> GameSettings {
        GameSettings {
            field_width: 10,
            field_height: 10,
            ..GameSettings::default()
        }
    }

    fn new_session(now: Instant) -> GameSession {
        GameSession::new(&test_settings(), 42, now)
    }

    #[test]
    fn test_movement_waits_for_the_timer() {
        let start = Instant::now();
        let mut session = new_session(start);
        let head = session.segments()[0];

        // Interval for length 1 is just under 300ms.
        session.frame(FrameInput::default(), start + ms(100));
        assert_eq!(session.segments()[0], head);

        session.frame(FrameInput::default(), start + ms(300));
        assert_eq!(session.segments()[0], Point::new(4, 5));
    }

    #[test]
    fn test_direction_intent_applies_on_the_movement_tick() {
        let start = Instant::now();
        let mut session = new_session(start);

        session.frame(FrameInput::direction(Direction::Up), start + ms(300));
        assert_eq!(session.heading(), Direction::Up);
        assert_eq!(session.segments()[0], Point::new(5, 4));
    }

    #[test]
    fn test_boost_polls_at_saturated_interval() {
        let start = Instant::now();
        let mut session = new_session(start);
        let head = session.segments()[0];

        // 100ms is below the length-1 interval but above the saturated
        // 80ms minimum.
        let input = FrameInput {
            direction: None,
            boost: true,
        };
        session.frame(input, start + ms(100));
        assert_ne!(session.segments()[0], head);
    }

    #[test]
    fn test_pause_suspends_everything() {
        let start = Instant::now();
        let mut session = new_session(start);
        let head = session.segments()[0];

        session.toggle_pause();
        assert!(session.is_paused());
        session.frame(FrameInput::default(), start + ms(10_000));
        assert_eq!(session.segments()[0], head);
        assert_eq!(session.state.grid().fruit_count(), 0);

        session.toggle_pause();
        session.frame(FrameInput::default(), start + ms(10_100));
        assert_ne!(session.segments()[0], head);
    }

    #[test]
    fn test_collision_latches_until_reset() {
        let start = Instant::now();
        let mut session = new_session(start);
        session.set_layout(Layout::Bordered, start);

        // Head starts at (5,5) heading Left; the wall is at x = 0, so
        // four moves in, the fifth collides.
        let mut now = start;
        for _ in 0..20 {
            now += ms(300);
            session.frame(FrameInput::default(), now);
        }
        assert_eq!(session.game_over(), Some(Collision::Wall));
        let head = session.segments()[0];
        assert_eq!(head, Point::new(1, 5));

        // Frames are no-ops while game over is latched.
        now += ms(5000);
        session.frame(FrameInput::default(), now);
        assert_eq!(session.segments()[0], head);

        session.reset(now);
        assert_eq!(session.game_over(), None);
        assert_eq!(session.segments(), &[Point::new(5, 5)]);
        assert_eq!(session.heading(), Direction::Left);
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_fruit_spawns_on_its_own_cadence() {
        let start = Instant::now();
        let mut session = new_session(start);

        // Fruit interval for length 1 is just under 5000ms; a frame
        // past it spawns exactly one fruit.
        session.frame(FrameInput::default(), start + ms(5001));
        assert_eq!(session.state.grid().fruit_count(), 1);

        session.frame(FrameInput::default(), start + ms(5100));
        assert_eq!(session.state.grid().fruit_count(), 1);
    }

    #[test]
    fn test_walls_never_spawn_below_the_gate() {
        // Push fruit spawning out of reach so the snake stays at
        // length 1, below the wall gate, while the wall timer is ripe
        // on every frame.
        let settings = GameSettings {
            fruit_curve: DifficultyCurve::new(3_600_000, 3_600_000, 50),
            wall_curve: DifficultyCurve::new(100, 100, 100),
            ..test_settings()
        };
        let start = Instant::now();
        let mut session = GameSession::new(&settings, 42, start);

        let mut now = start;
        for _ in 0..50 {
            now += ms(301);
            session.frame(FrameInput::default(), now);
        }
        assert_eq!(session.game_over(), None);
        assert_eq!(session.state.grid().wall_count(), 0);
    }

    #[test]
    fn test_walls_spawn_once_past_the_gate() {
        let settings = GameSettings {
            fruit_curve: DifficultyCurve::new(3_600_000, 3_600_000, 50),
            wall_curve: DifficultyCurve::new(100, 100, 100),
            wall_gate: 1,
            ..test_settings()
        };
        let start = Instant::now();
        let mut session = GameSession::new(&settings, 42, start);

        // Grow to length 2 by stepping onto a staged fruit; the wall
        // timer is ripe within the same frame, and the gate check reads
        // the post-growth length.
        session.state.grid_mut().set(Point::new(4, 5), CellKind::Fruit);
        session.frame(FrameInput::default(), start + ms(300));
        assert_eq!(session.segments().len(), 2);
        assert_eq!(session.state.grid().wall_count(), 1);
    }

    #[test]
    fn test_score_is_length_minus_one() {
        let start = Instant::now();
        let session = new_session(start);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_elapsed_freezes_while_paused() {
        let start = Instant::now();
        let mut session = new_session(start);

        session.frame(FrameInput::default(), start + ms(400));
        assert_eq!(session.elapsed(), ms(400));

        session.toggle_pause();
        session.frame(FrameInput::default(), start + ms(9000));
        assert_eq!(session.elapsed(), ms(400));
    }

    #[test]
    fn test_intervals_shrink_after_growth() {
        let start = Instant::now();
        let mut session = new_session(start);
        let before = session.intervals();
        assert_eq!(before.movement, session.movement_timer.interval(1));

        // Drop a fruit right in the snake's path and step onto it.
        session.state.grid_mut().set(Point::new(4, 5), CellKind::Fruit);
        session.frame(FrameInput::default(), start + ms(300));
        assert_eq!(session.score(), 1);

        let after = session.intervals();
        assert!(after.movement < before.movement);
        assert!(after.fruit_spawn < before.fruit_spawn);
    }
}

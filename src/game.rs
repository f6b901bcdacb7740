use std::cmp::{max, min};
use std::time::Duration;

use crate::snake::{Direction, Snake};
use crate::Coord;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const FIELD_WIDTH: i16 = 40;
pub const FIELD_HEIGHT: i16 = 20;

const INITIAL_SNAKE_LENGTH: usize = 3;
const FOOD_POINTS: u32 = 10;

const BASE_DELAY_MS: u32 = 120;
const MIN_DELAY_MS: u32 = 40;
const MAX_DELAY_CUT_MS: u32 = 80;

const BORDER_CHAR: char = '#';
const FOOD_CHAR: char = '@';
const HEAD_CHAR: char = 'O';
const BODY_CHAR: char = 'o';
const EMPTY_CHAR: char = ' ';

const CONTROLS_HINT: &str = "Controls: W A S D or arrow keys. Press 'q' to quit.";

pub enum Command {
    Turn(Direction),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    Ate,
    Crashed,
    Won,
}

/// One game session's worth of state. Owns its RNG so a seeded game plays
/// out the same way every time.
pub struct Game {
    width: i16,
    height: i16,
    snake: Snake,
    food: Coord,
    score: u32,
    over: bool,
    won: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(width: i16, height: i16, rng: StdRng) -> Self {
        let center = (width / 2, height / 2);
        let snake = Snake::new(center, INITIAL_SNAKE_LENGTH, Direction::Right);

        let mut game = Game {
            width,
            height,
            snake,
            food: (0, 0),
            score: 0,
            over: false,
            won: false,
            rng,
        };
        game.food = game.place_food().expect("field too small for the snake");
        game
    }

    /// Advances the session by one tick: move the head, settle collisions,
    /// eat food. Must not be called once the game is over.
    pub fn advance(&mut self) -> StepResult {
        let candidate = self.snake.next_head();
        let (x, y) = candidate;

        if x < 0 || y < 0 || x >= self.width || y >= self.height || self.snake.contains(candidate) {
            self.over = true;
            return StepResult::Crashed;
        }

        if candidate == self.food {
            // The eaten cell stays part of the body, so eating grows the
            // snake by one on the same tick.
            self.snake.grow_to(candidate);
            self.score += FOOD_POINTS;

            match self.place_food() {
                Some(food) => self.food = food,
                None => {
                    self.over = true;
                    self.won = true;
                    return StepResult::Won;
                }
            }
            StepResult::Ate
        } else {
            self.snake.slide_to(candidate);
            StepResult::Moved
        }
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) => self.snake.set_direction(dir),
            Command::Quit => self.over = true,
        }
    }

    /// Ticks get shorter as the score grows, down to a fixed floor.
    pub fn tick_delay(&self) -> Duration {
        let cut = min(MAX_DELAY_CUT_MS, self.score / 5);
        Duration::from_millis(u64::from(max(MIN_DELAY_MS, BASE_DELAY_MS - cut)))
    }

    /// The full frame, top to bottom: bordered field, score line, controls.
    pub fn render_rows(&self) -> Vec<String> {
        let border: String = (0..self.width + 2).map(|_| BORDER_CHAR).collect();
        let mut rows = Vec::with_capacity(self.height as usize + 4);

        rows.push(border.clone());
        for y in 0..self.height {
            let mut row = String::with_capacity(self.width as usize + 2);
            row.push(BORDER_CHAR);
            for x in 0..self.width {
                row.push(self.cell_char((x, y)));
            }
            row.push(BORDER_CHAR);
            rows.push(row);
        }
        rows.push(border);

        rows.push(format!("Score: {}", self.score));
        rows.push(CONTROLS_HINT.to_string());
        rows
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coord {
        self.food
    }

    ///////////////////////////////////////////////////////////////////////////

    fn cell_char(&self, pos: Coord) -> char {
        if pos == self.food {
            FOOD_CHAR
        } else if pos == self.snake.head() {
            HEAD_CHAR
        } else if self.snake.contains(pos) {
            BODY_CHAR
        } else {
            EMPTY_CHAR
        }
    }

    fn place_food(&mut self) -> Option<Coord> {
        let free: Vec<Coord> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&pos| !self.snake.contains(pos))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}

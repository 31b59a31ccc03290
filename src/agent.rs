use rand::Rng;

use crate::board::Board;

pub const INITIAL_HUNGER: i32 = 100;
pub const INITIAL_HEALTH: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    Up,
    Left,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// What an agent may do on its turn. Nothing schedules turns yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentAction {
    #[default]
    Nop,
    Step,
    Eat,
    Attack,
}

impl AgentAction {
    pub const ALL: [AgentAction; 4] = [
        AgentAction::Nop,
        AgentAction::Step,
        AgentAction::Eat,
        AgentAction::Attack,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub position: Position,
    pub direction: Direction,
    pub hunger: i32,
    pub health: i32,
}

impl Agent {
    pub fn random(board: &Board, rng: &mut impl Rng) -> Self {
        let agent = Agent {
            position: Position::new(
                rng.random_range(0..board.width as i32),
                rng.random_range(0..board.height as i32),
            ),
            direction: Direction::random(rng),
            hunger: INITIAL_HUNGER,
            health: INITIAL_HEALTH,
        };
        debug_assert!(board.contains(agent.position));
        agent
    }

    /// Agents are inert: every turn is a no-op.
    pub fn action(&self) -> AgentAction {
        AgentAction::Nop
    }
}

/// Fixed set of agents, created once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    pub fn random(count: usize, board: &Board, rng: &mut impl Rng) -> Self {
        Population {
            agents: (0..count).map(|_| Agent::random(board, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }
}

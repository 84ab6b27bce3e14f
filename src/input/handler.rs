use crate::game::Direction;

/// What the host should do with one piece of raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
    None,
}

/// Translates text input into host commands
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a single key, case-insensitive
    pub fn handle_key(&self, key: char) -> Command {
        match key.to_ascii_lowercase() {
            // Movement - WASD
            'w' => Command::Turn(Direction::Up),
            's' => Command::Turn(Direction::Down),
            'a' => Command::Turn(Direction::Left),
            'd' => Command::Turn(Direction::Right),

            // Controls
            'q' => Command::Quit,
            'r' => Command::Restart,

            _ => Command::None,
        }
    }

    /// Map a full input line. Single characters go through [`Self::handle_key`].
    pub fn handle_line(&self, line: &str) -> Command {
        let line = line.trim();
        let mut chars = line.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            return self.handle_key(key);
        }

        match line.to_ascii_lowercase().as_str() {
            "up" => Command::Turn(Direction::Up),
            "down" => Command::Turn(Direction::Down),
            "left" => Command::Turn(Direction::Left),
            "right" => Command::Turn(Direction::Right),
            "quit" | "exit" => Command::Quit,
            "restart" => Command::Restart,
            _ => Command::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

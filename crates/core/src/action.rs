// Input actions dispatched by the host to the active player

/// Action identifiers, numbered as the host's keymap numbers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Select,
    PreviousMenu,
    Other(u32),
}

impl ActionId {
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => Self::MoveLeft,
            2 => Self::MoveRight,
            3 => Self::MoveUp,
            4 => Self::MoveDown,
            7 => Self::Select,
            10 => Self::PreviousMenu,
            other => Self::Other(other),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Self::MoveLeft => 1,
            Self::MoveRight => 2,
            Self::MoveUp => 3,
            Self::MoveDown => 4,
            Self::Select => 7,
            Self::PreviousMenu => 10,
            Self::Other(id) => id,
        }
    }
}

/// An input action with its analog amount (1.0 for key presses)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    pub id: ActionId,
    pub amount: f32,
}

impl Action {
    pub fn new(id: ActionId) -> Self {
        Self { id, amount: 1.0 }
    }
}

impl From<ActionId> for Action {
    fn from(id: ActionId) -> Self {
        Self::new(id)
    }
}

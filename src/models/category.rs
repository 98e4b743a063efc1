/// Fixed set of expense categories, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Food,
    Transport,
    Grocery,
    Personal,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Grocery => "Grocery",
            Self::Personal => "Personal",
            Self::Others => "Others",
        }
    }

    /// Case-insensitive lookup by name. Returns `None` for anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "grocery" => Some(Self::Grocery),
            "personal" => Some(Self::Personal),
            "others" | "other" => Some(Self::Others),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Grocery,
            Self::Personal,
            Self::Others,
        ]
    }

    /// Position in the selector, used to step through categories.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|c| c == self).unwrap_or(0)
    }

    /// Step forward (`delta > 0`) or backward through the selector, wrapping at both ends.
    pub fn cycle(&self, delta: i32) -> Self {
        let all = Self::all();
        let len = all.len() as i32;
        let next = (self.index() as i32 + delta).rem_euclid(len) as usize;
        all[next]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BulkAmount {
    #[default]
    One,
    Ten,
    Hundred,
}

impl BulkAmount {
    pub const ALL: [Self; 3] = [Self::One, Self::Ten, Self::Hundred];

    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            10 => Some(Self::Ten),
            100 => Some(Self::Hundred),
            _ => None,
        }
    }

    pub fn count(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Ten => 10,
            Self::Hundred => 100,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::One => Self::Ten,
            Self::Ten => Self::Hundred,
            Self::Hundred => Self::One,
        }
    }
}

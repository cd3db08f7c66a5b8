///
/// ValueTag
///
/// Stable value-variant tag used for diagnostics and range-bound checks.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Bool = 1,
    Decimal = 2,
    Float64 = 3,
    Int = 4,
    List = 5,
    Null = 6,
    Text = 7,
    Timestamp = 8,
    Uint = 9,
}

impl ValueTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Decimal => "Decimal",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::List => "List",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Timestamp => "Timestamp",
            Self::Uint => "Uint",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

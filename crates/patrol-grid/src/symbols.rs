//! Input alphabet for grid text.

/// Characters that carry meaning in grid input.
///
/// Every other character is free space and is not recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSymbols {
    /// Marks the agent's starting cell. Default: `^`.
    pub start: char,
    /// Marks a blocking cell. Default: `#`.
    pub obstruction: char,
}

impl GridSymbols {
    /// Glyph used for free cells when rendering.
    pub const FREE: char = '.';
    /// Glyph used for visited cells when rendering.
    pub const VISITED: char = 'X';
}

impl Default for GridSymbols {
    fn default() -> Self {
        Self {
            start: '^',
            obstruction: '#',
        }
    }
}

use super::{Word, REGISTER_COUNT};

/// ## Register bank
///
/// Eight plain word cells, zeroed at construction.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    cells: [Word; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }

    pub fn from_array(cells: [Word; REGISTER_COUNT]) -> Registers {
        Registers { cells }
    }

    pub fn get(&self, index: usize) -> Option<Word> {
        self.cells.get(index).copied()
    }

    /// Returns false and changes nothing when `index` is not a register.
    pub fn set(&mut self, index: usize, value: Word) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.cells.iter()
    }

    pub fn as_array(&self) -> &[Word; REGISTER_COUNT] {
        &self.cells
    }
}

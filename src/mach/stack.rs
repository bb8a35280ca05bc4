use crate::error;
use crate::error::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced vector
///
/// Grows and shrinks only at the tail. Popping an empty stack is an
/// error the caller decides how to treat.

#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(vec: Vec<T>) -> Stack<T> {
        Stack { vec }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_lifo() {
        let mut s: Stack<u16> = Stack::new();
        s.push(1);
        s.push(2);
        assert_eq!(s.pop(), Ok(2));
        assert_eq!(s.pop(), Ok(1));
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let s = Stack::from(vec![3u16, 4, 5]);
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(s.last(), Some(&5));
    }
}

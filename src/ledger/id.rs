use super::ExpenseId;

/// Issues strictly increasing expense identifiers.
///
/// Ids are never reused within a session, so rapid successive submissions and
/// deletions cannot produce a collision.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> ExpenseId {
        let id = ExpenseId::new(self.next);
        self.next += 1;
        id
    }

    /// Identifier the next call to `next_id` will return.
    pub fn peek(&self) -> ExpenseId {
        ExpenseId::new(self.next)
    }
}

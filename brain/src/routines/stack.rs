use crate::routines::Routine;

pub const PUSHED: &str = ">";
pub const POPPED: &str = "<";

/// Pending routines, last in first out. Only the top one runs.
#[derive(Clone, Debug, Default)]
pub struct RoutineStack {
    routines: Vec<Routine>,
}

impl RoutineStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    pub fn push(&mut self, routine: Routine) {
        self.routines.push(routine);
    }

    pub fn top(&self) -> Option<&Routine> {
        self.routines.last()
    }

    pub fn pop(&mut self) -> Option<Routine> {
        self.routines.pop()
    }
}

#[cfg(test)]
mod tests {
    use crate::routines::{Routine, RoutineStack};

    #[test]
    fn last_in_first_out() {
        let mut stack = RoutineStack::new();
        stack.push(Routine::Atba);
        stack.push(Routine::Kickoff);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&Routine::Kickoff));
        assert_eq!(stack.pop(), Some(Routine::Kickoff));
        assert_eq!(stack.pop(), Some(Routine::Atba));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}

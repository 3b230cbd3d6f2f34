use super::{CoolLex, LendingIterator, SelectedIndices};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotStarted,
    InProgress,
    Done,
}

/// Lazy sequence of combinations in cool-lex order.
///
/// The engine starts at the first combination, so the first pull yields it without a
/// transition; every later pull advances the engine first.
#[derive(Debug, Clone)]
pub struct Combinations {
    engine: Option<CoolLex>,
    state: State,
}

impl Combinations {
    pub(crate) fn new(engine: CoolLex) -> Combinations {
        Combinations {
            engine: Some(engine),
            state: State::NotStarted,
        }
    }

    /// A sequence with no combinations.
    pub fn empty() -> Combinations {
        Combinations {
            engine: None,
            state: State::Done,
        }
    }

    pub fn has_next(&self) -> bool {
        self.state != State::Done
    }

    pub fn try_next(&mut self) -> Result<SelectedIndices<'_>> {
        let engine = match self.engine.as_mut() {
            Some(engine) => engine,
            None => return Err(Error::Exhausted),
        };
        match self.state {
            State::NotStarted => {}
            State::InProgress => engine.advance()?,
            State::Done => return Err(Error::Exhausted),
        }
        self.state = if engine.has_more() {
            State::InProgress
        } else {
            State::Done
        };
        Ok(engine.selected_indices())
    }

    /// Feeds each remaining combination to `f` until it returns `false`.
    pub fn do_while<F>(mut self, mut f: F)
    where
        F: FnMut(SelectedIndices<'_>) -> bool,
    {
        while let Ok(indices) = self.try_next() {
            if !f(indices) {
                break;
            }
        }
    }

    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(SelectedIndices<'_>),
    {
        self.do_while(|indices| {
            f(indices);
            true
        });
    }
}

impl LendingIterator for Combinations {
    type Item<'a> = SelectedIndices<'a>;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        self.try_next().ok()
    }
}

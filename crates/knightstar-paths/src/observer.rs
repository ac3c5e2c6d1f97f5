use crate::search::ChessStar;

/// Receives the search state after every expansion step.
///
/// Observers are read-only: they see the engine through a shared borrow and
/// cannot influence which square is expanded next.
pub trait StepObserver {
    /// Called once per step, after the expansion and before the goal check.
    fn on_step(&mut self, search: &ChessStar);
}

impl<F: FnMut(&ChessStar)> StepObserver for F {
    fn on_step(&mut self, search: &ChessStar) {
        self(search)
    }
}

/// An observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl StepObserver for Silent {
    fn on_step(&mut self, _search: &ChessStar) {}
}

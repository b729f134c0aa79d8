/// A hook called at each decision point of a long-running routine.
///
/// The divider search reports every skipped and evaluated resistor pair to
/// its observer. Returning `Some(action)` asks the routine to act on it (the
/// search only understands a request to stop); `None` means keep going.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is one that
/// never acts.
pub trait Observer<E, A> {
    /// Called once per event, in the order the routine produces them.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

use leptos::prelude::*;

/// Run a reducer against the value of `signal`.
///
/// The signal is written only when the reducer actually changed the value, so
/// ignored messages do not wake up subscribers.
pub fn apply<S, E>(signal: RwSignal<S>, reducer: impl FnOnce(&mut S) -> E) -> E
where
    S: Clone + PartialEq + Send + Sync + 'static,
{
    let mut next = signal.get_untracked();
    let event = reducer(&mut next);
    if signal.with_untracked(|current| *current != next) {
        signal.set(next);
    }
    event
}

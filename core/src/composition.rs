//! Reducer composition utilities.
//!
//! Large features are built from small reducers. Two combinators cover the
//! common cases:
//!
//! - [`combine_reducers`]: run several reducers over the same state/action
//!   pair, concatenating their effects. Used when independent flows (for
//!   example session handling and list synchronization) share one root
//!   state and one action enum.
//! - [`scope_reducer`]: lift a reducer written against a child state into a
//!   parent state that embeds it.

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combine multiple reducers into one.
///
/// Each reducer receives every action and may update state and emit
/// effects. Effects are concatenated in reducer order.
///
/// # Examples
///
/// ```
/// use admin_console_core::{Effect, Reducer, SmallVec, smallvec};
/// use admin_console_core::composition::combine_reducers;
///
/// #[derive(Clone, Default)]
/// struct TallyState {
///     reds: u32,
///     blues: u32,
/// }
///
/// #[derive(Clone)]
/// enum TallyAction {
///     Red,
///     Blue,
/// }
///
/// struct RedReducer;
///
/// impl Reducer for RedReducer {
///     type State = TallyState;
///     type Action = TallyAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut TallyState,
///         action: TallyAction,
///         _env: &(),
///     ) -> SmallVec<[Effect<TallyAction>; 4]> {
///         if matches!(action, TallyAction::Red) {
///             state.reds += 1;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// struct BlueReducer;
///
/// impl Reducer for BlueReducer {
///     type State = TallyState;
///     type Action = TallyAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut TallyState,
///         action: TallyAction,
///         _env: &(),
///     ) -> SmallVec<[Effect<TallyAction>; 4]> {
///         if matches!(action, TallyAction::Blue) {
///             state.blues += 1;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// type BoxedTally = Box<dyn Reducer<State = TallyState, Action = TallyAction, Environment = ()>>;
///
/// let combined = combine_reducers(vec![
///     Box::new(RedReducer) as BoxedTally,
///     Box::new(BlueReducer),
/// ]);
///
/// let mut state = TallyState::default();
/// combined.reduce(&mut state, TallyAction::Red, &());
/// assert_eq!(state.reds, 1);
/// assert_eq!(state.blues, 0);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`]. Note that the boxed reducers make this
/// type non-`Clone`; stores that require a `Clone` reducer should compose
/// with a concrete delegating struct instead (see the console crate's root
/// reducer).
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scope a reducer to operate on a subset of a larger state.
///
/// Allows reusing reducers written for a child state inside a parent state
/// that embeds the child.
///
/// # Type Parameters
///
/// - `S`: the parent state type
/// - `SubS`: the child state type (embedded in `S`)
/// - `A`: the action type
/// - `E`: the environment type
///
/// # Examples
///
/// ```
/// use admin_console_core::{Effect, Reducer, SmallVec, smallvec};
/// use admin_console_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct SpinnerState {
///     active: u32,
/// }
///
/// #[derive(Clone)]
/// enum SpinnerAction {
///     Start,
///     Stop,
/// }
///
/// struct SpinnerReducer;
///
/// impl Reducer for SpinnerReducer {
///     type State = SpinnerState;
///     type Action = SpinnerAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut SpinnerState,
///         action: SpinnerAction,
///         _env: &(),
///     ) -> SmallVec<[Effect<SpinnerAction>; 4]> {
///         match action {
///             SpinnerAction::Start => state.active += 1,
///             SpinnerAction::Stop => state.active = state.active.saturating_sub(1),
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     spinner: SpinnerState,
///     title: String,
/// }
///
/// let scoped = scope_reducer(
///     SpinnerReducer,
///     |app: &AppState| &app.spinner,
///     |app: &mut AppState, spinner: SpinnerState| {
///         app.spinner = spinner;
///     },
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, SpinnerAction::Start, &());
/// assert_eq!(state.spinner.active, 1);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // Work on a clone of the sub-state, then write it back
        let mut sub_state = (self.get_state)(state).clone();

        let effects = self.reducer.reduce(&mut sub_state, action, env);

        (self.set_state)(state, sub_state);

        effects
    }
}

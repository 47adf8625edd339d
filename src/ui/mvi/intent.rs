/// Marker for values fed to a [`Reducer`](super::Reducer).
///
/// Covers both user actions (selecting a breed) and outcomes produced
/// off-thread (a finished breed fetch), so intents must be `Send`.
pub trait Intent: Send + 'static {}

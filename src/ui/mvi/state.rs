/// Marker for state owned by a reducer.
///
/// `Default` lets callers `mem::take` the current value while reducing.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

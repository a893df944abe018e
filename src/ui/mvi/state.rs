/// Snapshot of one UI slice. `Default` is what `dispatch_mvi!` leaves behind
/// while the reducer owns the previous value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a key press, a settled fetch, a view switch.
pub trait Intent: Send + 'static {}

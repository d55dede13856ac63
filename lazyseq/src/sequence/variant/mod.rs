mod deferred;
mod delayed;
mod empty;
mod many;

pub use deferred::Deferred;
pub use delayed::Delayed;
pub use empty::Empty;
pub use many::Many;

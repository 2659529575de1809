mod process;

pub use process::{lookup, Error, Snapshot, Status, Timeval};

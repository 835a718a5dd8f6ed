mod invocation;
mod status;

pub use invocation::InvocationRecord;
pub use status::{Status, Tier};

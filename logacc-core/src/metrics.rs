mod accuracy;
mod example_count;
mod metric;

pub use accuracy::*;
pub use example_count::*;
pub use metric::*;

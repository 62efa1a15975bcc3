#[cfg(feature = "std")]
pub use std::collections::{HashMap, HashSet};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use hashbrown::{HashMap, HashSet};

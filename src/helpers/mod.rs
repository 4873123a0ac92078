pub(crate) mod convert;
pub(crate) mod distinct;
pub(crate) mod extract;
pub(crate) mod group;
pub(crate) mod maps;
pub(crate) mod matching;
pub(crate) mod ordering;

pub use convert::*;
pub use distinct::unique_with_key;
pub use extract::*;
pub use group::*;
pub use maps::*;
pub use matching::*;
pub use ordering::*;

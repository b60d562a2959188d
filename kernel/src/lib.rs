pub use crate::error::*;

mod dsl;
mod entity;
mod error;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod dsl {
        pub use crate::dsl::*;
    }
}

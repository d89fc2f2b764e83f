//! Pure data structures shared by the catalog, the cart and the gateway.

pub mod cart;
pub mod category;
pub mod dish;
pub mod submission;

pub use cart::*;
pub use category::*;
pub use dish::*;
pub use submission::*;

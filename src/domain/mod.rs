pub mod address;
pub mod order;
pub mod order_item;

pub use address::*;
pub use order::*;
pub use order_item::*;

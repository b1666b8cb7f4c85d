pub mod dock;

pub use dock::*;

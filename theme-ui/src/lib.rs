pub mod components;
pub mod controller;
pub mod interop;
pub mod storage;
pub mod surface;

pub use components::*;
pub use controller::*;
pub use interop::*;
pub use storage::*;
pub use surface::*;

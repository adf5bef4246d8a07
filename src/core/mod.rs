pub mod color;
pub mod config;
pub mod constants;
pub mod sim;
pub mod surface;
pub mod trail;
pub mod wave;

pub use config::*;
pub use sim::*;
pub use surface::*;
pub use trail::*;
pub use wave::*;

pub mod network;
pub mod params;

pub use network::{backward, forward, ForwardCache};
pub use params::{Gradients, Params};

pub mod activation;

pub use activation::Relu;

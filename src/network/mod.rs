pub mod network;

pub use network::{Activations, Gradients, Network};

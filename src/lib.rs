pub mod math;
pub mod activation;
pub mod data;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod bench;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use data::xor::XorDataset;
pub use layers::dense::Layer;
pub use network::network::{Activations, Gradients, Network};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::report::TrainReport;
pub use train::train_config::TrainConfig;
pub use train::trainer::train_network;
pub use bench::config::BenchConfig;
pub use bench::harness::run_benchmark;
pub use bench::run_stats::RunStats;

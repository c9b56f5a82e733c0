use crate::data::xor::XorDataset;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::report::TrainReport;
use crate::train::train_config::TrainConfig;

/// Trains `network` in place for exactly `config.epochs` epochs of batch
/// gradient descent over the full dataset and returns a `TrainReport`.
///
/// Each epoch runs one forward pass, optionally records the loss, runs one
/// backward pass, and applies one parameter update. The loop is fully
/// sequential and deterministic for a deterministically-initialized network.
///
/// # Panics
/// Panics if the dataset is empty.
pub fn train_network(
    network: &mut Network,
    dataset: &XorDataset,
    optimizer: &Sgd,
    config: &TrainConfig,
) -> TrainReport {
    assert!(dataset.num_examples() > 0, "dataset must not be empty");

    let n = dataset.num_examples();
    let mut loss_history = if config.record_loss {
        Some(Vec::with_capacity(config.epochs))
    } else {
        None
    };

    for _ in 0..config.epochs {
        let acts = network.forward(&dataset.x);

        if let Some(history) = loss_history.as_mut() {
            history.push(MseLoss::loss(&acts.output, &dataset.y));
        }

        let grads = network.backward(&dataset.x, &dataset.y, &acts);
        optimizer.step(network, grads, n);
    }

    let acts = network.forward(&dataset.x);
    TrainReport {
        final_loss: MseLoss::loss(&acts.output, &dataset.y),
        loss_history,
    }
}

//! Random Forest training: sequential tree construction into a shared arena.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

use crate::config::RandomForestConfig;
use crate::error::ForestError;
use crate::model::RandomForestModel;
use crate::node::NodeArena;
use crate::sample::{self, Sample};
use crate::tree::{GrowLimits, grow};

/// Train the Random Forest ensemble.
///
/// Trees are built one at a time: each draws its own subset of the training
/// set, gets a fresh root at depth 1 in the shared arena, and is expanded to
/// completion before the next tree starts. The finished model carries only
/// the flat node array and the root ids; no per-node sample data survives.
#[instrument(skip_all, fields(num_tree = config.num_tree, n_samples = samples.len()))]
pub(crate) fn train(
    config: &RandomForestConfig,
    samples: &[Sample],
) -> Result<RandomForestModel, ForestError> {
    if config.num_feature == 0 {
        return Err(ForestError::ZeroFeatures);
    }
    if config.num_class == 0 {
        return Err(ForestError::ZeroClasses);
    }
    if samples.is_empty() {
        return Err(ForestError::EmptyDataset);
    }
    if config.sample_rate <= 0.0 || config.sample_rate > 1.0 {
        return Err(ForestError::InvalidSampleRate {
            rate: config.sample_rate,
        });
    }
    sample::validate(samples, config.num_feature, config.num_class)?;

    info!(
        num_tree = config.num_tree,
        num_feature = config.num_feature,
        num_class = config.num_class,
        max_depth = ?config.max_depth,
        min_size = config.min_size,
        sample_rate = config.sample_rate,
        "training random forest"
    );

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let limits = GrowLimits {
        max_depth: config.max_depth,
        min_size: config.min_size,
    };

    let mut arena = NodeArena::new();
    let mut root_ids = Vec::with_capacity(config.num_tree);
    for tree_index in 0..config.num_tree {
        let subset = sample::draw_subset(samples, config.sample_rate, &mut rng);
        let root = arena.alloc(1);
        root_ids.push(root);
        grow(
            &mut arena,
            root,
            subset,
            config.num_feature,
            config.num_class,
            limits,
        );
        debug!(tree_index, n_nodes = arena.len(), "tree complete");
    }

    info!(n_nodes = arena.len(), "random forest training complete");

    Ok(RandomForestModel {
        num_feature: config.num_feature,
        num_class: config.num_class,
        num_tree: config.num_tree,
        root_ids,
        nodes: arena.into_nodes(),
    })
}

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::data::dataset::Dataset;
use crate::error::Result;

/// Two well-separated clusters of 8-bit "images".
///
/// Class 0 pixels are drawn from 0..=99 and class 1 pixels from 155..=255,
/// so any positive weight vector separates them. Output goes through the same
/// preprocessing as real images. The same `seed` always yields the same data.
pub fn separable_blobs(
    n_train_per_class: usize,
    n_test_per_class: usize,
    features: usize,
    seed: u64,
) -> Result<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);

    let (train_images, train_labels) = sample_split(&mut rng, n_train_per_class, features);
    let (test_images, test_labels) = sample_split(&mut rng, n_test_per_class, features);

    Dataset::from_raw(
        &train_images,
        &train_labels,
        &test_images,
        &test_labels,
        vec!["dark".to_string(), "bright".to_string()],
    )
}

fn sample_split(rng: &mut StdRng, per_class: usize, features: usize) -> (Vec<Vec<u8>>, Vec<u8>) {
    let mut images = Vec::with_capacity(per_class * 2);
    let mut labels = Vec::with_capacity(per_class * 2);

    for label in [0u8, 1] {
        let (lo, hi) = if label == 0 { (0u8, 99u8) } else { (155u8, 255u8) };
        for _ in 0..per_class {
            let image = (0..features).map(|_| rng.gen_range(lo..=hi)).collect();
            images.push(image);
            labels.push(label);
        }
    }

    (images, labels)
}

/// Property tests over generated datasets
use corebiome_bio::{compute_core_biome, DetectionThresholds};
use corebiome_core::{BiomeParameters, SampleSelection, TAXONOMY};
use corebiome_test::{assert_no_sentinels, assert_thresholds_floor, random_dataset, RandomDatasetSpec};
use proptest::prelude::*;

fn small_spec(samples: usize) -> RandomDatasetSpec {
    RandomDatasetSpec {
        samples,
        nodes_per_classification: 25,
        ..RandomDatasetSpec::default()
    }
}

fn selection_from_mask(number_of_samples: usize, mask: u32) -> SampleSelection {
    SampleSelection::from_indices(
        number_of_samples,
        (0..number_of_samples).filter(|i| mask & (1 << i) != 0),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn test_thresholds_never_below_one(seed in any::<u64>(), percent in -10.0f32..200.0) {
        let dataset = random_dataset(seed, &small_spec(5));
        for (_, classification) in dataset.classifications() {
            let thresholds = DetectionThresholds::compute(5, &classification.counts, percent).unwrap();
            prop_assert_eq!(thresholds.len(), 5);
            assert_thresholds_floor(&thresholds);
        }
    }

    #[test]
    fn test_zero_percent_gives_all_ones(seed in any::<u64>(), samples in 1usize..8) {
        let dataset = random_dataset(seed, &small_spec(samples));
        let counts = &dataset.classification(TAXONOMY).unwrap().counts;

        let thresholds = DetectionThresholds::compute(samples, counts, 0.0).unwrap();
        prop_assert!(thresholds.as_slice().iter().all(|&t| t == 1));
    }

    #[test]
    fn test_core_set_shrinks_with_threshold(
        seed in any::<u64>(),
        mask in 1u32..64,
        percent in 0.0f32..5.0,
        threshold in 0usize..6,
    ) {
        let dataset = random_dataset(seed, &small_spec(6));
        let selection = selection_from_mask(6, mask);

        let lower = BiomeParameters::core(threshold).with_detection_percent(percent);
        let higher = BiomeParameters::core(threshold + 1).with_detection_percent(percent);
        let lower = compute_core_biome(&dataset, &selection, &lower).unwrap();
        let higher = compute_core_biome(&dataset, &selection, &higher).unwrap();

        for (name, biome) in &higher.classifications {
            let lower_table = lower.table(name).unwrap();
            prop_assert!(biome.table.len() <= lower_table.len());
            for (id, _) in biome.table.iter() {
                prop_assert!(lower_table.contains(id));
            }
        }
    }

    #[test]
    fn test_sentinels_never_reported(seed in any::<u64>(), threshold in 0usize..6, rare in any::<bool>()) {
        let dataset = random_dataset(seed, &small_spec(4));
        let params = if rare {
            BiomeParameters::rare(threshold)
        } else {
            BiomeParameters::core(threshold)
        };

        let result = compute_core_biome(&dataset, &dataset.all_samples(), &params).unwrap();
        for biome in result.classifications.values() {
            assert_no_sentinels(&biome.table);
        }
    }
}

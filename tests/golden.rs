use hero_noise::{GridSettings, Mulberry32, Noise2D, NoiseField, sample_grid};

#[test]
fn seed_one_center_of_first_cell() {
    assert_eq!(NoiseField::new(1.0).sample_2d(0.5, 0.5), 0.75);
}

#[test]
fn prng_seed_42() {
    let mut rng = Mulberry32::new(42);
    let drawn: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
    assert_eq!(
        drawn,
        [
            0.6011037519201636,
            0.44829055899754167,
            0.8524657934904099,
            0.6697340414393693,
            0.17481389874592423,
        ]
    );
}

#[test]
fn independent_fields_agree() {
    let fields: Vec<NoiseField> = (0..4).map(|_| NoiseField::new(314.0)).collect();
    for i in 0..64 {
        let (x, y) = (i as f64 * 0.37 - 9.0, i as f64 * -0.61 + 2.0);
        let first = fields[0].sample_2d(x, y);
        assert!(fields.iter().all(|f| f.sample_2d(x, y) == first));
    }
}

#[test]
fn different_seeds_differ() {
    let a = NoiseField::new(1.0);
    let b = NoiseField::new(2.0);
    let differs = (0..32).any(|i| {
        let x = i as f64 * 0.41 + 0.2;
        a.sample_2d(x, 0.7) != b.sample_2d(x, 0.7)
    });
    assert!(differs);
}

#[test]
fn shared_across_threads() {
    let field = std::sync::Arc::new(NoiseField::new(1.0));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let field = field.clone();
            std::thread::spawn(move || field.sample_2d(0.5, 0.5))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 0.75);
    }
}

#[test]
fn frame_through_trait_object() {
    let field = NoiseField::new(1.0);
    let noise: &dyn Noise2D = &field;
    assert_eq!(noise.sample_2d(0.5, 0.5), 0.75);

    let settings = GridSettings {
        scale: 2.0,
        drift: 0.0,
        ..GridSettings::with_size(2, 2)
    };
    let frame = sample_grid(&field, &settings).unwrap();
    // pixel (1, 1) sits at (0.5, 0.5)
    assert_eq!(frame, [0.0, field.sample_2d(0.5, 0.0), field.sample_2d(0.0, 0.5), 0.75]);
}

//! End-to-end scenarios: a 4x4 ring of 32px cells driven by constants and
//! by spark-signals.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{derived, signal};
use spark_spritesheet::{
    resolve, spritesheet, spritesheet_for, GridConfig, ImageId, Observable, Reactive,
    SpritesheetProps, Vector2,
};

fn ring(count: u32, images: &[&str]) -> GridConfig {
    GridConfig::builder()
        .cell_size(32)
        .cell_count(count)
        .columns(4)
        .rows(4)
        .images(images.iter().copied())
        .build()
        .unwrap()
}

// =============================================================================
// Resolver scenarios
// =============================================================================

#[test]
fn test_scenario_table() {
    let config = ring(16, &["idle", "page0"]);

    // (alpha, cell_index, page, offset, image)
    let cases = [
        (0.0, 0, 0, Vector2::new(0, 0), "idle"),
        (0.5, 8, 0, Vector2::new(0, 64), "idle"),
        (1.0, 15, 0, Vector2::new(96, 96), "idle"),
        (-1.0, 0, 0, Vector2::new(0, 0), "idle"),
    ];

    for (alpha, index, page, offset, image) in cases {
        let cell = resolve(&config, alpha);
        assert_eq!(cell.cell_index, index, "alpha {alpha}");
        assert_eq!(cell.page, page, "alpha {alpha}");
        assert_eq!(cell.offset, offset, "alpha {alpha}");
        assert_eq!(cell.image(&config).as_str(), image, "alpha {alpha}");
    }
}

#[test]
fn test_scenario_second_page() {
    let config = ring(20, &["sheet-a", "sheet-b"]);

    let cell = resolve(&config, 17.0 / 20.0);
    assert_eq!(cell.cell_index, 17);
    assert_eq!(cell.page, 1);
    assert_eq!(cell.local_index, 1);
    assert_eq!(cell.offset, Vector2::new(32, 0));
    assert_eq!(cell.image(&config), &config.images()[1]);

    // Negative progress overrides the image, not the geometry
    let idle = resolve(&config, -0.25);
    assert_eq!(idle.page, 0);
    assert_eq!(idle.image(&config).as_str(), "sheet-a");
}

#[test]
fn test_scenario_from_json_descriptor() {
    let config = GridConfig::from_json(
        r#"{
            "size": 48,
            "count": 40,
            "columns": 5,
            "rows": 4,
            "images": ["ring-0.png", "ring-1.png"]
        }"#,
    )
    .unwrap();

    let binding = spritesheet_for(config, 0.99);
    let frame = binding.frame();
    // floor(0.99 * 40) = 39 -> page 1, local 19 -> column 4, row 3
    assert_eq!(frame.image.as_str(), "ring-1.png");
    assert_eq!(frame.offset, Vector2::new(192, 144));
    assert_eq!(frame.size, Vector2::splat(48));
}

// =============================================================================
// Kind preservation and propagation
// =============================================================================

#[test]
fn test_constant_progress_yields_constants() {
    let binding = spritesheet_for(ring(16, &["idle", "page0"]), 0.5);

    assert!(binding.image_rect_size.is_constant());
    assert!(binding.image_rect_offset.is_constant());
    assert!(binding.image.is_constant());
    assert_eq!(binding.image_rect_offset.get(), Vector2::new(0, 64));
}

#[test]
fn test_observable_outputs_fire_in_order() {
    let progress = signal(0.0f64);
    let binding = spritesheet_for(ring(20, &["page0", "page1"]), progress.clone());

    let log = Rc::new(RefCell::new(Vec::new()));

    let l = log.clone();
    let _size = binding
        .image_rect_size
        .subscribe(move |v| l.borrow_mut().push(format!("size {v}")));
    let l = log.clone();
    let _offset = binding
        .image_rect_offset
        .subscribe(move |v| l.borrow_mut().push(format!("offset {v}")));
    let l = log.clone();
    let _image = binding
        .image
        .subscribe(move |v| l.borrow_mut().push(format!("image {v}")));

    log.borrow_mut().clear();

    progress.set(0.85);
    let after_first = log.borrow().len();
    assert_eq!(after_first, 3);

    progress.set(-1.0);
    progress.set(0.075);

    let log = log.borrow();
    assert_eq!(log.len(), 9);
    assert_eq!(log.iter().filter(|l| l.starts_with("size")).count(), 3);

    let offsets: Vec<_> = log.iter().filter(|l| l.starts_with("offset")).cloned().collect();
    assert_eq!(offsets, vec!["offset (32, 0)", "offset (0, 0)", "offset (32, 0)"]);

    let images: Vec<_> = log.iter().filter(|l| l.starts_with("image")).cloned().collect();
    assert_eq!(images, vec!["image page1", "image page0", "image page0"]);
}

#[test]
fn test_progress_from_derived_signal() {
    let loaded = signal(0u32);
    let total = 8u32;

    let loaded_for_derived = loaded.clone();
    let fraction = derived(move || f64::from(loaded_for_derived.get()) / f64::from(total));
    let alpha: Reactive<f64> = Observable::from_getter(move || fraction.get()).into();

    let binding = spritesheet(SpritesheetProps::new(ring(16, &["ring"]), alpha).with_rest("hud"));
    assert!(binding.is_observable());
    assert_eq!(binding.props, "hud");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let _stop = binding.subscribe(move |frame| s.borrow_mut().push(frame.offset));

    for step in 1..=total {
        loaded.set(step);
    }

    let seen = seen.borrow();
    assert_eq!(seen.len(), 9);
    assert_eq!(seen[0], Vector2::ZERO);
    // 4/8 -> cell 8 -> row 2
    assert_eq!(seen[4], Vector2::new(0, 64));
    // 8/8 -> last cell
    assert_eq!(seen[8], Vector2::new(96, 96));
}

#[test]
fn test_image_id_values_are_config_entries() {
    let config = ring(20, &["a", "b"]);
    let progress = signal(0.0f64);
    let binding = spritesheet_for(config.clone(), progress.clone());

    for step in 0..=20 {
        progress.set(f64::from(step) / 20.0);
        let image: ImageId = binding.image.get();
        assert!(config.images().contains(&image));
    }
}

use super::*;
use crate::color::palette::builtin_palettes;

fn test_palette() -> Palette {
    Palette::from_hex(
        "test",
        &["#111111", "#222222", "#333333", "#444444", "#555555"],
    )
    .unwrap()
}

#[test]
fn working_set_size_stays_in_bounds() {
    let palette = test_palette();
    for seed in 0..32 {
        let mut rng = Rng::new(seed);
        let selector = PaletteColorSelector::new(&palette, false, &mut rng).unwrap();
        let len = selector.choices().len();
        assert!((2..=palette.colors.len()).contains(&len), "len = {len}");
    }
}

#[test]
fn working_set_draws_from_the_palette() {
    let palette = test_palette();
    let mut rng = Rng::new(3);
    let selector = PaletteColorSelector::new(&palette, false, &mut rng).unwrap();
    for color in selector.choices() {
        assert!(palette.colors.contains(color));
    }
}

#[test]
fn rotation_cycles_over_the_working_set() {
    let palette = test_palette();
    let mut rng = Rng::new(5);
    let mut selector = PaletteColorSelector::new(&palette, false, &mut rng).unwrap();
    let expected = selector.choices().to_vec();
    for round in 0..2 {
        for color in &expected {
            assert_eq!(selector.next_color(&mut rng), *color, "round {round}");
        }
    }
}

#[test]
fn random_order_serves_working_set_colors() {
    let palette = test_palette();
    let mut rng = Rng::new(7);
    let mut selector = PaletteColorSelector::new(&palette, true, &mut rng).unwrap();
    let working = selector.choices().to_vec();
    for _ in 0..50 {
        assert!(working.contains(&selector.next_color(&mut rng)));
    }
}

#[test]
fn background_rolls_follow_their_chances() {
    let palette = test_palette();
    let mut rng = Rng::new(9);
    let selector = PaletteColorSelector::new(&palette, false, &mut rng).unwrap();

    assert_eq!(selector.background_color(1.0, 0.0, &mut rng), Rgba::BLACK);
    assert_eq!(selector.background_color(0.0, 1.0, &mut rng), Rgba::WHITE);
    let fallback = selector.background_color(0.0, 0.0, &mut rng);
    assert!(selector.choices().contains(&fallback));
}

#[test]
fn identical_seeds_pick_identical_working_sets() {
    let palettes = builtin_palettes().unwrap();
    let palette = &palettes[0];
    let mut a_rng = Rng::new(42);
    let mut b_rng = Rng::new(42);
    let a = PaletteColorSelector::new(palette, false, &mut a_rng).unwrap();
    let b = PaletteColorSelector::new(palette, false, &mut b_rng).unwrap();
    assert_eq!(a.choices(), b.choices());
    assert_eq!(a.name(), b.name());
}

use super::*;

#[test]
fn map_range_interpolates() {
    assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    assert_eq!(map_range(0.0, 0.0, 10.0, 20.0, 40.0), 20.0);
    assert_eq!(map_range(10.0, 0.0, 10.0, 20.0, 40.0), 40.0);
}

#[test]
fn map_range_extrapolates_outside_input() {
    assert_eq!(map_range(20.0, 0.0, 10.0, 0.0, 100.0), 200.0);
    assert_eq!(map_range(-5.0, 0.0, 10.0, 0.0, 100.0), -50.0);
}

#[test]
fn map_range_empty_input_interval_maps_to_out_min() {
    assert_eq!(map_range(7.0, 3.0, 3.0, 10.0, 20.0), 10.0);
}

#[test]
fn normalize_is_map_onto_unit() {
    assert_eq!(normalize(25.0, 0.0, 100.0), 0.25);
    assert_eq!(normalize(100.0, 0.0, 100.0), 1.0);
}

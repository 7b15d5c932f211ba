use super::*;

const RED: Rgba = Rgba {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
const GREEN: Rgba = Rgba {
    r: 0,
    g: 255,
    b: 0,
    a: 255,
};
const BLUE: Rgba = Rgba {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

fn gradient3() -> Arc<MappedGradient> {
    Arc::new(
        MappedGradient::new(vec![
            crate::color::gradient::GradientStep::new(RED, 0.0),
            crate::color::gradient::GradientStep::new(GREEN, 0.5),
            crate::color::gradient::GradientStep::new(BLUE, 1.0),
        ])
        .unwrap(),
    )
}

fn vertical(bounds: Option<(f64, f64)>) -> VerticalGradientLine {
    let mut rng = Rng::new(1);
    VerticalGradientLine::new(
        Coordinate::new(10.0, 0.0),
        Coordinate::new(10.0, 100.0),
        1.0,
        gradient3(),
        LineRenderMode::Vertices,
        bounds,
        &mut rng,
    )
}

#[test]
fn first_and_last_vertex_sit_on_the_line_extent() {
    let line = vertical(None);
    let vertices = line.vertices();
    assert_eq!(vertices.first().unwrap().coordinate.y, 0.0);
    assert_eq!(vertices.last().unwrap().coordinate.y, 100.0);
}

#[test]
fn stops_map_to_vertices_along_the_line() {
    let line = vertical(None);
    let ys: Vec<f64> = line.vertices().iter().map(|v| v.coordinate.y).collect();
    assert_eq!(ys, vec![0.0, 50.0, 100.0]);
    assert_eq!(line.vertices()[0].color, RED);
    assert_eq!(line.vertices()[1].color, GREEN);
    assert_eq!(line.vertices()[2].color, BLUE);
}

#[test]
fn segments_pair_consecutive_vertices() {
    let line = vertical(None);
    let vertices = line.vertices();
    let segments = line.segments();
    assert_eq!(segments.len(), vertices.len() - 1);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.start(), vertices[i].coordinate);
        assert_eq!(segment.end(), vertices[i + 1].coordinate);
        assert_eq!(segment.color_a(), vertices[i].color);
        assert_eq!(segment.color_b(), vertices[i + 1].color);
    }
}

#[test]
fn shared_window_samples_the_line_slice_of_the_gradient() {
    // The window is twice the line, so the line only covers the first half of
    // the gradient and ends on the middle stop's color.
    let line = vertical(Some((0.0, 200.0)));
    let vertices = line.vertices();
    assert_eq!(vertices.len(), 2);
    assert_eq!(vertices[0].color, RED);
    assert_eq!(vertices[1].coordinate.y, 100.0);
    assert_eq!(vertices[1].color, GREEN);
}

#[test]
fn exhausted_stops_still_close_on_the_line_end() {
    // The window is half the line, so every stop lands above the end y and
    // the closing vertex clamps to the last stop's color.
    let line = vertical(Some((0.0, 50.0)));
    let ys: Vec<f64> = line.vertices().iter().map(|v| v.coordinate.y).collect();
    assert_eq!(ys, vec![0.0, 25.0, 50.0, 100.0]);
    assert_eq!(line.vertices().last().unwrap().color, BLUE);
}

#[test]
fn rebuild_is_idempotent() {
    let mut line = vertical(None);
    line.rebuild(0.0, 100.0);
    let first_vertices = line.vertices().to_vec();
    let first_segments = line.segments().to_vec();
    line.rebuild(0.0, 100.0);
    assert_eq!(line.vertices(), first_vertices.as_slice());
    assert_eq!(line.segments(), first_segments.as_slice());
}

#[test]
fn rebuild_discards_the_old_lists() {
    let mut line = vertical(None);
    assert_eq!(line.vertices().len(), 3);
    line.rebuild(0.0, 200.0);
    assert_eq!(line.vertices().len(), 2);
    assert_eq!(line.gradient_bounds(), (0.0, 200.0));
    assert_eq!(line.vertices().last().unwrap().color, GREEN);
}

#[test]
fn odd_vertex_strips_get_one_nudged_duplicate() {
    let line = vertical(None);
    assert_eq!(line.vertices().len() % 2, 1);

    let submitted = line.render_vertices();
    assert_eq!(submitted.len() % 2, 0);
    assert_eq!(submitted.len(), line.vertices().len() + 1);

    let last = submitted[submitted.len() - 1];
    let prior = submitted[submitted.len() - 2];
    assert_eq!(last.color, prior.color);
    assert_eq!(last.coordinate.x, prior.coordinate.x);
    let offset = last.coordinate.y - prior.coordinate.y;
    assert!(offset > 0.0 && offset < 0.01);
}

#[test]
fn even_vertex_strips_submit_unchanged() {
    let line = vertical(Some((0.0, 200.0)));
    assert_eq!(line.vertices().len() % 2, 0);
    assert_eq!(line.render_vertices().len(), line.vertices().len());
}

#[test]
fn random_mode_resolves_at_construction() {
    for seed in 0..8 {
        let mut rng = Rng::new(seed);
        let line = VerticalGradientLine::new(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 100.0),
            1.0,
            gradient3(),
            LineRenderMode::Random,
            None,
            &mut rng,
        );
        assert_ne!(line.render_mode(), LineRenderMode::Random);
    }
}

#[test]
fn base_line_takes_its_colors_from_the_strip_ends() {
    let line = vertical(None);
    assert_eq!(line.line().color_a(), RED);
    assert_eq!(line.line().color_b(), BLUE);
}

#[test]
fn canvas_redraw_remaps_vertices_segments_and_bounds() {
    let mut line = vertical(None);
    let from = Canvas::new(100, 100).unwrap();
    let to = Canvas::new(200, 300).unwrap();
    line.canvas_redraw(from, to);

    let ys: Vec<f64> = line.vertices().iter().map(|v| v.coordinate.y).collect();
    assert_eq!(ys, vec![0.0, 150.0, 300.0]);
    for vertex in line.vertices() {
        assert_eq!(vertex.coordinate.x, 20.0);
    }
    assert_eq!(line.segments()[0].end(), Coordinate::new(20.0, 150.0));
    assert_eq!(line.line().end(), Coordinate::new(20.0, 300.0));
    assert_eq!(line.gradient_bounds(), (0.0, 300.0));
}

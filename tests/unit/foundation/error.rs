use super::*;

#[test]
fn invalid_argument_display() {
    let err = LinefallError::invalid_argument("empty gradient");
    assert_eq!(err.to_string(), "invalid argument: empty gradient");
}

#[test]
fn render_display() {
    let err = LinefallError::render("pixmap too large");
    assert_eq!(err.to_string(), "render error: pixmap too large");
}

#[test]
fn other_is_transparent_over_anyhow() {
    let err: LinefallError = anyhow::anyhow!("boom").into();
    assert_eq!(err.to_string(), "boom");
}

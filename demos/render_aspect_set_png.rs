use std::fs;
use std::path::Path;

use linefall::{
    AspectRatio, Canvas, CpuSurface, FallingLines, LinesConfig, PaletteColorSelector, Rng,
    builtin_palettes, encode_png,
};

// One composition saved at every aspect preset, remapped between saves the
// way the interactive sketch resizes its canvas.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(42);

    let mut rng = Rng::new(seed);
    let base_canvas = Canvas::with_aspect(AspectRatio::Square, 1000)?;
    let palettes = builtin_palettes()?;
    let palette = rng
        .pick(&palettes)
        .ok_or_else(|| anyhow::anyhow!("no palettes"))?
        .clone();
    let color_selector = PaletteColorSelector::new(&palette, false, &mut rng)?;
    let mut composition =
        FallingLines::new(LinesConfig::default(), base_canvas, color_selector, &mut rng)?;

    let out_dir = Path::new("target/demos");
    fs::create_dir_all(out_dir)?;

    let presets = [
        ("square", AspectRatio::Square),
        ("pinterest_pin", AspectRatio::PinterestPin),
        ("tiktok_photo", AspectRatio::TiktokPhoto),
        ("social_video", AspectRatio::SocialVideo),
    ];

    for (name, ratio) in presets {
        let canvas = Canvas::with_aspect(ratio, 1000)?;
        composition.canvas_resize(canvas)?;

        let mut surface = CpuSurface::new(canvas)?;
        composition.draw(&mut surface)?;
        let frame = surface.into_frame()?;
        let png = encode_png(&frame)?;

        let out_path = out_dir.join(format!("falling_lines_{seed}_{name}.png"));
        fs::write(&out_path, png)?;
        eprintln!("wrote {}", out_path.display());
    }

    Ok(())
}

use std::fs;
use std::path::Path;

use linefall::{
    Canvas, CpuSurface, FallingLines, LinesConfig, PaletteColorSelector, Rng, builtin_palettes,
    encode_png,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(42);

    let mut rng = Rng::new(seed);
    let canvas = Canvas::new(1000, 1000)?;
    let palettes = builtin_palettes()?;
    let palette = rng
        .pick(&palettes)
        .ok_or_else(|| anyhow::anyhow!("no palettes"))?
        .clone();
    let color_selector = PaletteColorSelector::new(&palette, false, &mut rng)?;
    let composition = FallingLines::new(LinesConfig::default(), canvas, color_selector, &mut rng)?;

    let mut surface = CpuSurface::new(canvas)?;
    composition.draw(&mut surface)?;
    let frame = surface.into_frame()?;
    let png = encode_png(&frame)?;

    let out_dir = Path::new("target/demos");
    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join(format!("falling_lines_{seed}.png"));
    fs::write(&out_path, png)?;

    eprintln!(
        "seed {seed}, palette '{}', {} lines -> {}",
        composition.palette_name(),
        composition.line_total(),
        out_path.display()
    );
    Ok(())
}

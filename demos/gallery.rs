//! Draw one of each shape on a shared canvas and print it.
//!
//! Run with: cargo run --example gallery --features tracing
//! Set RUST_LOG=celldraw=debug to see each render call.

use celldraw::defaults::ROUNDED_GLYPH;
use celldraw::{
    Canvas, CircleShape, Figure, HeartShape, RectangleShape, StarShape, TriangleShape,
};
use glam::ivec2;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut figures = vec![
        (Figure::new(CircleShape::new(ivec2(12, 7), 5)?), '.'),
        (Figure::new(RectangleShape::new(ivec2(36, 7), 7, 8)?), ':'),
        (Figure::new(TriangleShape::new(ivec2(50, 12), 9, 9, 12)?), '*'),
        (Figure::new(HeartShape::new(ivec2(86, 7), 3)?), '#'),
        (Figure::new(StarShape::new(ivec2(120, 7), 7)?), '+'),
    ];

    let mut canvas = Canvas::bounded(140, 22);
    for (figure, fill) in &mut figures {
        figure.outline(ROUNDED_GLYPH, &mut canvas)?;
        figure.fill(*fill, &mut canvas)?;
    }
    println!("{canvas}");
    if canvas.clipped() > 0 {
        eprintln!("{} writes fell outside the canvas", canvas.clipped());
    }

    // Side lengths that cannot close into a triangle are reported, not drawn
    if let Err(err) = TriangleShape::new(ivec2(0, 0), 2, 3, 9) {
        eprintln!("{:?}", miette::Report::new(err));
    }
    Ok(())
}

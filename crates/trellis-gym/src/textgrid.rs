use trellis::{DrawCmd, Expanse, Point};

/// Render a display list as ASCII art. Each character cell covers a
/// `scale` x `scale` block of pixels and takes the glyph of the last command
/// covering the block's centre. Uncovered cells are `.`.
pub fn render_text(cmds: &[DrawCmd], screen: Expanse, scale: u32) -> String {
    let scale = scale.max(1);
    let cols = screen.w.div_ceil(scale);
    let rows = screen.h.div_ceil(scale);
    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let p = Point {
                x: col * scale + scale / 2,
                y: row * scale + scale / 2,
            };
            let glyph = cmds
                .iter()
                .rev()
                .find(|c| c.rect.contains_point(p))
                .map(|c| c.fill)
                .unwrap_or('.');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

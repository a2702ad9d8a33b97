use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{error::Result, widget::Widget};

/// Traverses a widget tree and returns a string showing the names and
/// rectangles of each widget, with ANSI colours. This is a debug function.
pub fn dump(root: &dyn Widget) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_widget(&mut buffer, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Like [`dump`], without colour codes.
pub fn dump_plain(root: &dyn Widget) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_widget(&mut buffer, root, 0)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Walk a widget subtree and emit formatted debug output.
fn dump_widget(buffer: &mut Buffer, w: &dyn Widget, level: usize) -> Result<()> {
    let indent = "    ".repeat(level);
    let r = w.base().rect();

    write!(buffer, "{indent}")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{}", w.name())?;
    buffer.reset()?;
    write!(buffer, " ({}, {}) {}x{}", r.tl.x, r.tl.y, r.w, r.h)?;
    if !w.base().visible() {
        buffer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(buffer, " hidden")?;
        buffer.reset()?;
    }
    writeln!(buffer)?;

    // Hidden subtrees are still listed; they keep their geometry.
    let mut res = Ok(());
    w.children(&mut |c| {
        if res.is_ok() {
            res = dump_widget(buffer, c, level + 1);
        }
    });
    res
}

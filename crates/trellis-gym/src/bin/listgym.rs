//! Drive a scrollable list with scripted wheel input and print the result.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use trellis::{Expanse, Padding, dump::dump, logging};
use trellis_gym::{
    listgym::{ListGym, RowHeights, display, scroll},
    textgrid::render_text,
};
use trellis_widgets::ScrollConfig;

/// CLI flags for the list gym.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows.
    #[clap(long, default_value_t = 12)]
    rows: usize,

    /// Fixed row height. Rows get random heights when omitted.
    #[clap(long)]
    row_height: Option<u32>,

    /// Seed for random row heights.
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// List width in pixels.
    #[clap(long, default_value_t = 200)]
    width: u32,

    /// List height in pixels.
    #[clap(long, default_value_t = 120)]
    height: u32,

    /// Uniform padding in pixels.
    #[clap(long, default_value_t = 0)]
    padding: u32,

    /// Wheel movement to apply, one frame each. Negative scrolls down.
    #[clap(long, allow_negative_numbers = true)]
    wheel: Vec<i32>,

    /// Snap the render offset to row tops.
    #[clap(long)]
    snap: bool,

    /// Keep the view pinned to the bottom.
    #[clap(long)]
    stick_to_bottom: bool,

    /// JSON scroll config file.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Pixels per character cell in the text rendering.
    #[clap(long, default_value_t = 10)]
    scale: u32,

    /// Print the widget tree after the last frame.
    #[clap(short, long)]
    dump: bool,

    /// Increase log verbosity.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Run the list gym.
pub fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(logging::level_for_verbosity(args.verbose))?;

    let config = match &args.config {
        Some(p) => ScrollConfig::load(p)?,
        None => ScrollConfig::default(),
    };
    let gym = ListGym {
        size: Expanse::new(args.width, args.height),
        rows: args.rows,
        heights: match args.row_height {
            Some(h) => RowHeights::Fixed(h),
            None => RowHeights::Random {
                min: 10,
                max: 60,
                seed: args.seed,
            },
        },
        padding: Padding::uniform(args.padding),
        snap: args.snap,
        stick_to_bottom: args.stick_to_bottom,
        config,
    };

    let mut list = gym.build();
    for dy in &args.wheel {
        scroll(&mut list, *dy);
    }

    let cmds = display(&mut list, gym.size);
    print!("{}", render_text(&cmds, gym.size, args.scale));
    println!(
        "position {} / {}, offset {}",
        list.scrollbar().position(),
        list.scrollbar().max_position(),
        list.clip_view().top_offset()
    );
    if args.dump {
        print!("{}", dump(&list)?);
    }
    Ok(())
}

use anyhow::Result;

use crate::source::TalkSource;
use crate::widgets::Marquee;

pub struct TuiRunOptions {
    pub source: Box<dyn TalkSource>,
    pub marquee: Marquee,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}

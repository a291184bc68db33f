//! Activity 1: environment setup checklist.

use anyhow::Result;

use crate::activities::banner;
use crate::core::menu::ActivityId;
use crate::io::console::{Console, blank, write_lines};
use crate::io::screens::Screens;

pub fn run<C: Console + ?Sized>(console: &mut C, screens: &Screens) -> Result<()> {
    banner(console, ActivityId::Setup)?;
    blank(console)?;
    write_lines(console, screens.setup_guide()?.lines())
}

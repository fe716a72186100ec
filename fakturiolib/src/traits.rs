//! Unifikovaný trait zápisu faktury do výstupního formátu přes std::io::Write.

use crate::{error::Result, model::Invoice};
use std::io::Write;

pub trait WriteFormat {
    fn write<W: Write>(w: W, invoice: &Invoice) -> Result<()>;
}

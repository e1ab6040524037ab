//! Command implementations.

pub mod check;
pub mod encode;
pub mod inspect;

pub use self::check::execute_check;
pub use self::encode::execute_encode;
pub use self::inspect::execute_inspect;

use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// Read all bytes from `path`, or from stdin when it is `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read(path)?)
}

//! Line-oriented command scripts for driving a lot
//!
//! ```text
//! park AP-1234 red
//! park - blue        # no registration number
//! unpark 1
//! parked AP-1234
//! count red
//! full
//! occupancy
//! status
//! ```

pub mod parser;
pub mod runner;

pub use parser::{Command, ScriptError, ScriptLine, parse_script};
pub use runner::{Outcome, Runner};

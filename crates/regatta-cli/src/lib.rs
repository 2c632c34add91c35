//! Library side of the `regatta` command: logging setup, run stages and
//! file output.

pub mod logging;
pub mod output;
pub mod pipeline;
pub mod types;

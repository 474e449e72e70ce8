pub mod args;
pub mod value_enum;

pub use args::{Args, ClearArgs, Command, GenerateArgs, StatsArgs};

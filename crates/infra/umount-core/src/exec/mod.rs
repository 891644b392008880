mod runner;

#[cfg(test)]
mod mock;

pub use runner::{CommandOutput, CommandRunner, ShellRunner};

#[cfg(test)]
pub use mock::MockRunner;

pub(crate) mod args;

pub use args::{BookSetupCli, TriggerCli};

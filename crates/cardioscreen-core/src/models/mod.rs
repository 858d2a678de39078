pub mod features;
pub mod intake;
pub mod outcome;

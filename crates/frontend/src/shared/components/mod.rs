pub mod choice;

pub use choice::ChoiceGroup;

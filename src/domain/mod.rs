pub mod achievement;
pub mod search;

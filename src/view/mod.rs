mod about;
mod home;

pub use about::*;
pub use home::*;

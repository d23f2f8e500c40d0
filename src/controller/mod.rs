mod about;
mod home;

pub(crate) use about::*;
pub(crate) use home::*;

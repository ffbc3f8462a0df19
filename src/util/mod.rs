pub(crate) mod blank;
pub(crate) mod parse;

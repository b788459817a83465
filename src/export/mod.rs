pub(crate) mod encode;
pub(crate) mod sequence;

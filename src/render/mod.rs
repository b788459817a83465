pub(crate) mod compositor;
pub(crate) mod cpu;
pub(crate) mod recording;
pub(crate) mod surface;
pub(crate) mod text;

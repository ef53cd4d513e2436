pub(crate) mod animator;
pub(crate) mod scheduler;
pub(crate) mod smoothing;

pub(crate) mod fetch;
pub(crate) mod preloader;
pub(crate) mod progress;

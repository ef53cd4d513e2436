pub(crate) mod address;
pub(crate) mod decode;
pub(crate) mod store;

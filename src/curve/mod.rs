pub(crate) mod cache;
pub(crate) mod factory;
pub(crate) mod fitter;
pub(crate) mod library;
pub(crate) mod model;
pub(crate) mod transform;

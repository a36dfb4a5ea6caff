pub(crate) mod region;
pub(crate) mod sampler;
pub(crate) mod smoother;
pub(crate) mod wheel;

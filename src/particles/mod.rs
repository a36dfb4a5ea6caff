pub(crate) mod field;
pub(crate) mod mask;
pub(crate) mod particle;
pub(crate) mod pool;
pub(crate) mod text_raster;

pub(crate) mod drawing;
pub(crate) mod ghost;
pub(crate) mod matcher;
pub(crate) mod stroke;

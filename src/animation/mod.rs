pub(crate) mod ease;
pub(crate) mod interp;
pub(crate) mod timing;

pub(crate) mod builders;
pub(crate) mod descriptor;
pub(crate) mod graph;

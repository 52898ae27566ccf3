pub(crate) mod applier;
pub(crate) mod controller;
pub(crate) mod layer;
pub(crate) mod runner;

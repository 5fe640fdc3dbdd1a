pub(crate) mod emitter;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod registry;
pub(crate) mod type_mapper;

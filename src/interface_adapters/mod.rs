// Interface adapters layer: HTTP wiring and the grid library binding.

pub mod h3;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;

// HTTP surface: routing, handlers, query validation and the server loop.

pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod server;

pub use router::{build_app, build_router, build_routes};

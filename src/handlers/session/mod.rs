// handlers/session/mod.rs - Dashboard session helpers
//
// Exposes the route-guard decision and display-name resolution to clients
// that cannot run them locally.

pub mod display_name; // GET /api/dashboard/display-name
pub mod guard;        // POST /api/route-guard/decide

pub use display_name::display_name_get;
pub use guard::guard_decide;

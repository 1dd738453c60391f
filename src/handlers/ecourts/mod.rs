// handlers/ecourts/mod.rs - eCourts lookup endpoints
//
// Responses from this module are never cached; the router wraps it in the
// no_store middleware.

pub mod cnr; // POST /api/ecourts/cnr - case lookup by CNR number

pub use cnr::cnr_post;

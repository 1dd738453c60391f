// handlers/mod.rs - HTTP handlers grouped by area
//
// ecourts:  provider lookups (/api/ecourts/*)
// session:  route guard and dashboard helpers (/api/route-guard/*, /api/dashboard/*)
// system:   service descriptor and health (/, /health)

pub mod ecourts;
pub mod session;
pub mod system;

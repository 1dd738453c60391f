// team/mod.rs - Team roster and display-name enrichment
//
// The roster lives in an external storage service. The dashboard only reads
// it to turn a signed-in user's email into the name the firm knows them by.

pub mod member;
pub mod resolver;
pub mod roster;

pub use member::{find_by_email, TeamMember};
pub use resolver::{resolve_display_name, DisplayNameResolver, NameSource, Refresh, ResolvedName};
pub use roster::{HttpTeamRoster, RosterError, TeamRoster};

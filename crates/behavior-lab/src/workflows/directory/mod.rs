//! Referral member directory: seeded profiles, roster import, and search.

pub mod domain;
mod import;
pub mod router;
mod search;
mod seed;

pub use domain::{Member, MemberId, MemberTag};
pub use import::DirectoryError;
pub use router::directory_router;
pub use search::{search_members, MemberDirectory};
pub use seed::seed_members;

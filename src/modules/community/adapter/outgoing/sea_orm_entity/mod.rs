pub mod communities;
pub mod community_members;

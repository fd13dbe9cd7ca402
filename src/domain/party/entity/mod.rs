pub mod party;
pub mod party_apply;
pub mod party_comment;
pub mod party_like;
pub mod party_tag;

pub mod membership;
pub mod recommendation;
pub mod seed;

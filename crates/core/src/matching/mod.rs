//! Vehicle name matching domain

pub mod assets;
pub mod catalog;
pub mod normalize;
pub mod similarity;

pub use assets::AssetResolver;
pub use catalog::resolve;
pub use normalize::normalize;
pub use similarity::similarity;

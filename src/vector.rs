//! TF-IDF vector space over the taxonomy and the keyword vocabulary.
//!
//! # Module Structure
//!
//! - `dense`: the [`Vector`] type, one coordinate per seed document
//! - `space`: the frozen [`VectorSpaceModel`] that turns tokens into vectors
//! - `similarity`: cosine similarity between two vectors

pub mod dense;
pub mod similarity;
pub mod space;

pub use self::dense::Vector;
pub use self::similarity::cosine_similarity;
pub use self::space::VectorSpaceModel;

pub mod listing_extractor;

pub use listing_extractor::ListingExtractor;

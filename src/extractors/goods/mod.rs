pub mod extract_image_url;
pub mod extract_meta_image;
pub mod extract_scored_image;

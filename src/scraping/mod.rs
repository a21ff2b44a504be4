pub mod get_product_image_url;

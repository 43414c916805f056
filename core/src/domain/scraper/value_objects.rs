use md5::{Digest, Md5};

/// Image URLs taken from the browser-driven search.
pub const BROWSER_SEARCH_LIMIT: usize = 100;
/// Image URLs requested from the search API.
pub const API_SEARCH_LIMIT: usize = 50;
pub const MAX_DOWNLOADS_PER_CATEGORY: usize = 150;
/// A progress line is logged each time the global total hits a multiple of this.
pub const PROGRESS_LOG_INTERVAL: u64 = 100;

/// Search phrase sent to both image sources.
pub fn search_query(food_name: &str) -> String {
    format!("{} food", food_name)
}

pub fn category_directory_name(food_name: &str) -> String {
    food_name.replace(' ', "_")
}

/// First eight hex characters of the MD5 digest of `url`.
pub fn url_hash(url: &str) -> String {
    let digest = Md5::digest(url.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(8);
    hash
}

/// `<food>_<index>_<hash8>.jpg`, where `index` is the URL's position in the
/// merged source list.
pub fn image_file_name(food_name: &str, index: usize, url: &str) -> String {
    format!("{}_{}_{}.jpg", food_name, index, url_hash(url))
}

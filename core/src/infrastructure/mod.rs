pub mod classifier;
pub mod download;
pub mod image;
pub mod image_search;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_server;

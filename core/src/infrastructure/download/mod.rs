pub mod http_downloader;

pub use http_downloader::HttpImageDownloader;

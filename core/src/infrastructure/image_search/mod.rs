pub mod unsplash;
pub mod webdriver;

pub use unsplash::UnsplashImageSearch;
pub use webdriver::BrowserImageSearch;

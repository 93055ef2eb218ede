pub mod pager;
pub mod provider;
pub mod types;
pub mod youtube;

pub use pager::{fetch_comments, CommentPager, PAGE_SIZE};
pub use provider::{CommentPage, CommentSource};
pub use youtube::YouTubeClient;

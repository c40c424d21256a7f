//! Defines the [`PostsController`] type, which binds the posts fetched by a
//! [`BlogApi`] to view state for a rendering layer to paint. The controller
//! owns nothing but transient state: every activation starts from an empty
//! collection and fetches fresh, so tearing one down loses nothing.

use crate::api::{BlogApi, Error};
use crate::post::{Post, Posts};

/// The default number of posts per page when no configuration says
/// otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Binds a post collection to renderable view state. Construction is inert;
/// nothing is fetched until [`PostsController::activate`] is called, and
/// until then [`PostsController::posts`] is an empty collection (never
/// absent).
pub struct PostsController<A> {
    api: A,
    page_size: usize,
    posts: Posts,
    error: Option<Error>,
}

impl<A: BlogApi> PostsController<A> {
    /// Constructs a controller over the given fetch dependency with the
    /// default page size.
    pub fn new(api: A) -> PostsController<A> {
        Self::with_page_size(api, DEFAULT_PAGE_SIZE)
    }

    /// Constructs a controller over the given fetch dependency and page
    /// size.
    pub fn with_page_size(api: A, page_size: usize) -> PostsController<A> {
        PostsController {
            api,
            page_size,
            posts: Posts::new(),
            error: None,
        }
    }

    /// Resets the view state to empty and fetches the post collection
    /// exactly once. On success the collection replaces the view state
    /// wholesale (never merged or appended); on failure the error is
    /// recorded and the state stays empty. Each activation is independent:
    /// a repeated activation clears any prior error and fetches again.
    pub fn activate(&mut self) {
        self.posts = Posts::new();
        self.error = None;
        match self.api.posts() {
            Ok(posts) => self.posts = posts,
            Err(err) => self.error = Some(err),
        }
    }

    /// The posts currently bound for rendering.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The error from the most recent activation, if it failed. The
    /// original front end swallowed fetch failures and left the list
    /// forever empty; surfacing them here is deliberate new behavior.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The number of full pages the current collection fills. A page size
    /// of zero fills no pages.
    pub fn page_count(&self) -> usize {
        self.posts.len().checked_div(self.page_size).unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use reqwest::StatusCode;
    use url::Url;

    use super::*;
    use crate::api::Result;

    /// A [`BlogApi`] that serves a canned collection (or a canned failure)
    /// and counts how many times it was asked.
    struct FakeApi {
        posts: Posts,
        fail: bool,
        calls: Cell<usize>,
    }

    impl FakeApi {
        fn with_posts(posts: Posts) -> FakeApi {
            FakeApi {
                posts,
                fail: false,
                calls: Cell::new(0),
            }
        }

        fn failing() -> FakeApi {
            FakeApi {
                posts: Posts::new(),
                fail: true,
                calls: Cell::new(0),
            }
        }
    }

    impl BlogApi for FakeApi {
        fn posts(&self) -> Result<Posts> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(Error::Status(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Url::parse("https://example.org/app/api/posts.json")
                        .unwrap(),
                ))
            } else {
                Ok(self.posts.clone())
            }
        }

        fn metadata(&self) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    fn test_posts() -> Posts {
        vec![
            Post {
                title: String::from("Test title 1"),
                body: String::from("Test body 1"),
                date: String::from("Test date 1"),
            },
            Post {
                title: String::from("Test title 2"),
                body: String::from("Test body 2"),
                date: String::from("Test date 2"),
            },
        ]
    }

    #[test]
    fn test_posts_empty_before_activation() {
        let controller = PostsController::new(FakeApi::with_posts(test_posts()));
        assert!(controller.posts().is_empty());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_activate_replaces_posts() {
        let mut controller =
            PostsController::new(FakeApi::with_posts(test_posts()));
        controller.activate();
        assert_eq!(test_posts(), controller.posts());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_activate_fetches_exactly_once() {
        let mut controller =
            PostsController::new(FakeApi::with_posts(test_posts()));
        controller.activate();
        assert_eq!(1, controller.api.calls.get());

        // A second activation is an independent fetch.
        controller.activate();
        assert_eq!(2, controller.api.calls.get());
    }

    #[test]
    fn test_activate_with_empty_collection() {
        let mut controller =
            PostsController::new(FakeApi::with_posts(Posts::new()));
        controller.activate();
        assert!(controller.posts().is_empty());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_activate_failure_sets_error() {
        let mut controller = PostsController::new(FakeApi::failing());
        controller.activate();
        assert!(controller.posts().is_empty());
        match controller.error() {
            Some(Error::Status(status, _)) => {
                assert_eq!(&StatusCode::INTERNAL_SERVER_ERROR, status)
            }
            other => panic!("wanted a status error, got {:?}", other),
        }
    }

    #[test]
    fn test_reactivation_clears_error() {
        let mut controller = PostsController::new(FakeApi::failing());
        controller.activate();
        assert!(controller.error().is_some());

        controller.api.fail = false;
        controller.activate();
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_page_count() {
        let posts = vec![Post::default(); 12];
        let mut controller =
            PostsController::with_page_size(FakeApi::with_posts(posts), 5);
        controller.activate();
        assert_eq!(2, controller.page_count());
    }

    #[test]
    fn test_page_count_zero_page_size() {
        let posts = vec![Post::default(); 3];
        let mut controller =
            PostsController::with_page_size(FakeApi::with_posts(posts), 0);
        controller.activate();
        assert_eq!(0, controller.page_count());
    }

    #[test]
    fn test_page_count_empty() {
        let controller = PostsController::new(FakeApi::with_posts(Posts::new()));
        assert_eq!(0, controller.page_count());
    }
}

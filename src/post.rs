//! Defines the [`Post`] type, the unit of content served by the blog's
//! `posts.json` resource, and the decoding logic that turns a response body
//! into a list of posts.

use serde::Deserialize;

/// A single blog entry as published by the API. Every field is free-form
/// text; in particular `date` is whatever string the author wrote in the
/// source post and is never parsed as a calendar date.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Post {
    /// The title of the post.
    #[serde(default)]
    pub title: String,

    /// The rendered body of the post.
    #[serde(default)]
    pub body: String,

    /// The publication date, verbatim from the source.
    #[serde(default)]
    pub date: String,
}

/// An ordered list of posts. Order is whatever the server returned; the
/// client never sorts, filters, or deduplicates.
pub type Posts = Vec<Post>;

/// Decodes a `posts.json` response body. The body must be a JSON array;
/// records missing fields decode with those fields empty rather than
/// failing the whole collection, since the API applies no schema of its
/// own.
pub fn decode_posts(body: &str) -> Result<Posts, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_posts() -> Result<(), serde_json::Error> {
        let body = r#"[
            {"title": "Test title 1", "body": "Test body 1", "date": "Test date 1"},
            {"title": "Test title 2", "body": "Test body 2", "date": "Test date 2"}
        ]"#;

        let wanted = vec![
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
        ];

        assert_eq!(wanted, decode_posts(body)?);
        Ok(())
    }

    #[test]
    fn test_decode_posts_empty() -> Result<(), serde_json::Error> {
        assert_eq!(Vec::<Post>::new(), decode_posts("[]")?);
        Ok(())
    }

    #[test]
    fn test_decode_posts_missing_fields() -> Result<(), serde_json::Error> {
        // No schema validation: a partial record decodes with the missing
        // fields empty instead of poisoning the collection.
        let wanted = vec![Post {
            title: String::from("Only a title"),
            body: String::new(),
            date: String::new(),
        }];

        assert_eq!(wanted, decode_posts(r#"[{"title": "Only a title"}]"#)?);
        Ok(())
    }

    #[test]
    fn test_decode_posts_not_an_array() {
        assert!(decode_posts(r#"{"title": "not a collection"}"#).is_err());
    }
}

//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use lcommon::MessageId;
//!
//! let id = MessageId::generate();
//! let other = MessageId::generate();
//! assert_ne!(id, other);
//! assert!(!id.to_string().is_empty());
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use lcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod id {
    //! Opaque identifier newtypes shared across the workspace.
    //!
    //! ```rust
    //! use lcommon::MessageId;
    //!
    //! let id = MessageId::from("message-1");
    //! assert_eq!(id.as_str(), "message-1");
    //! assert_eq!(id.to_string(), "message-1");
    //! ```

    use std::fmt::{Display, Formatter};

    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MessageId(String);

    impl MessageId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        /// Produces a fresh unique identifier.
        pub fn generate() -> Self {
            Self(Uuid::new_v4().to_string())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for MessageId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for MessageId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for MessageId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub use future::BoxFuture;
pub use id::MessageId;

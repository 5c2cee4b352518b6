//! Identity newtypes.
//!
//! Every id in Lobbyforge is a string on the wire (`"demo"`, `"room-7"`,
//! `"potion"`), but inside the code each kind of id gets its own type.
//! Passing a `RoomId` where a `PlayerId` is expected is a compile error,
//! not a lookup that silently misses.
//!
//! `#[serde(transparent)]` keeps the JSON shape flat: `PlayerId("demo")`
//! serializes as `"demo"`, not `{"0":"demo"}`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declares a string-backed identifier with the conversions every id needs.
///
/// `Borrow<str>` lets maps keyed by the id be queried with a plain `&str`.
/// That is sound because the derived `Hash`/`Eq` delegate to the inner
/// `String`, which hashes and compares exactly like `str`.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
            Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw string as an id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` for the empty id.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Consumes the id and returns the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifies a player. Accounts share the same id space: the account
    /// and player records created at registration both use the username.
    PlayerId
}

string_id! {
    /// Identifies a room. Rooms created by matchmaking reuse the match id.
    RoomId
}

string_id! {
    /// Identifies a catalog item.
    ItemId
}

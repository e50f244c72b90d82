use serde::{Deserialize, Serialize};

/// Placeholder shown when a snap's sender has no entry in the user listing.
pub const UNKNOWN_SENDER: &str = "unknown user";

/// One inbound snap as the backend lists it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snap {
    #[serde(rename = "_id")]
    pub id: String,

    /// Sender user id.
    pub from: String,

    /// Creation timestamp, RFC 3339.
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    pub username: String,

    #[serde(rename = "profilePicture", default)]
    pub profile_picture: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    pub username: String,

    #[serde(rename = "profilePicture", default)]
    pub avatar_url: String,
}

impl SenderProfile {
    pub fn unknown() -> Self {
        Self {
            username: UNKNOWN_SENDER.to_string(),
            avatar_url: String::new(),
        }
    }
}

/// A snap annotated client-side with its sender's profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedSnap {
    #[serde(rename = "_id")]
    pub id: String,

    pub from: String,
    pub date: String,

    #[serde(rename = "fromUser")]
    pub from_user: SenderProfile,
}

/// The viewable payload of a single snap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapContent {
    pub image: String,

    /// Display duration in whole seconds.
    pub duration: u64,
}

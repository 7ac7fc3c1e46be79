use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of presentation icons. Keys outside the known set map to
/// `Unknown`, which renders the same as the default globe icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Instagram,
    Youtube,
    Globe,
    Unknown,
}

impl Icon {
    pub fn from_key(key: &str) -> Self {
        match key {
            "instagram" => Icon::Instagram,
            "youtube" => Icon::Youtube,
            "globe" => Icon::Globe,
            _ => Icon::Unknown,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Icon::Instagram => "instagram",
            Icon::Youtube => "youtube",
            Icon::Globe => "globe",
            Icon::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Icon::Instagram => "Instagram",
            Icon::Youtube => "YouTube",
            Icon::Globe | Icon::Unknown => "Website",
        }
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::Globe
    }
}

impl std::str::FromStr for Icon {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Icon::from_key(s))
    }
}

impl Serialize for Icon {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(Icon::from_key(&key))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub is_active: bool,
    pub icon: Icon,
    pub order: i32,
}

impl Link {
    /// Field-wise merge: only fields present in the patch are overwritten.
    /// `id` is immutable and has no patch field.
    pub fn apply(&mut self, patch: LinkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// A link as submitted for creation, before the store assigns its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub is_active: bool,
    pub icon: Icon,
    pub order: i32,
}

impl LinkDraft {
    pub fn into_link(self, id: Uuid) -> Link {
        Link {
            id,
            title: self.title,
            url: self.url,
            is_active: self.is_active,
            icon: self.icon,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub background_color: String,
    pub button_color: String,
}

impl UserProfile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = avatar;
        }
        if let Some(background_color) = patch.background_color {
            self.background_color = background_color;
        }
        if let Some(button_color) = patch.button_color {
            self.button_color = button_color;
        }
    }

    /// Public share URL for this profile.
    pub fn share_url(&self) -> String {
        format!("linkbio.com/@{}", self.username)
    }

    /// Badge letter shown when no avatar image is set.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
}

/// One profile together with its links. This is the unit the snapshot
/// store persists and the memory store holds authoritatively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBioData {
    pub profile: UserProfile,
    pub links: Vec<Link>,
}

impl LinkBioData {
    /// Links shown on the public page. Inactive links stay editable but
    /// never appear here.
    pub fn active_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| link.is_active)
    }
}
